pub mod payment_history_table;
pub mod pending_bills_table;

pub use payment_history_table::PaymentHistoryTable;
pub use pending_bills_table::PendingBillsTable;
