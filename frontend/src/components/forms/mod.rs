pub mod fields;
pub mod new_bill_form;
pub mod pay_bill_form;
pub mod payment_history_form;
pub mod pending_bills_form;

pub use new_bill_form::NewBillForm;
pub use pay_bill_form::PayBillForm;
pub use payment_history_form::PaymentHistoryForm;
pub use pending_bills_form::PendingBillsForm;
