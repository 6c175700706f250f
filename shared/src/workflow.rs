//! Presentation state shared by the billing workflows: the tab list, the
//! submit lifecycle of a form, and the tables filled by listing searches.

use crate::error::{ApiError, ValidationError};
use crate::response::Listing;
use crate::PendingBill;

/// The four workflows, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkflowTab {
    #[default]
    CreateBill,
    PayBill,
    PendingBills,
    PaymentHistory,
}

impl WorkflowTab {
    pub const ALL: [WorkflowTab; 4] = [
        WorkflowTab::CreateBill,
        WorkflowTab::PayBill,
        WorkflowTab::PendingBills,
        WorkflowTab::PaymentHistory,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WorkflowTab::CreateBill => "Create New Bill",
            WorkflowTab::PayBill => "Pay Existing Bill",
            WorkflowTab::PendingBills => "View Pending Bills",
            WorkflowTab::PaymentHistory => "View Payment History",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Why a submission did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected by form validation, nothing was sent
    Invalid,
    /// The server could not be reached or answered with garbage
    Transport,
    /// The server answered with an application error
    Rejected,
}

/// Lifecycle of one form submission: idle, submitting, then success or failure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(FailureKind, String),
}

impl Submission {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn invalid(err: &ValidationError) -> Self {
        Submission::Failed(FailureKind::Invalid, err.to_string())
    }

    pub fn transport(err: &ApiError) -> Self {
        Submission::Failed(FailureKind::Transport, err.to_string())
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Submission::Failed(FailureKind::Rejected, message.into())
    }

    pub fn failure(&self) -> Option<(FailureKind, &str)> {
        match self {
            Submission::Failed(kind, message) => Some((*kind, message.as_str())),
            _ => None,
        }
    }
}

/// Rows shown under a listing form
#[derive(Debug, Clone, PartialEq)]
pub enum ResultTable<T> {
    /// No search has completed yet
    NotSearched,
    Rows(Vec<T>),
    /// The last search succeeded and matched nothing
    NoneFound,
}

impl<T> Default for ResultTable<T> {
    fn default() -> Self {
        ResultTable::NotSearched
    }
}

impl<T> ResultTable<T> {
    /// Replace the table with a successful search result
    pub fn show(&mut self, listing: Listing<T>) {
        *self = match listing {
            Listing::Found(rows) => ResultTable::Rows(rows),
            Listing::Empty => ResultTable::NoneFound,
        };
    }
}

/// Pending-bill table with optimistic payment.
///
/// Paying a row hides it at once. When the server confirms, the row is
/// dropped; when the payment fails it is shown again. Hidden rows keep their
/// place in the listing, so any number of payments can be outstanding and a
/// failed one always reappears where it was.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PendingBillsView {
    searched: bool,
    rows: Vec<PendingRow>,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingRow {
    bill: PendingBill,
    paying: bool,
}

impl PendingBillsView {
    /// What the table should show right now
    pub fn table(&self) -> ResultTable<PendingBill> {
        if !self.searched {
            return ResultTable::NotSearched;
        }
        let mut table = ResultTable::default();
        table.show(Listing::from(self.rows()));
        table
    }

    /// Visible rows, in listing order
    pub fn rows(&self) -> Vec<PendingBill> {
        self.rows
            .iter()
            .filter(|row| !row.paying)
            .map(|row| row.bill.clone())
            .collect()
    }

    pub fn has_payment_in_flight(&self) -> bool {
        self.rows.iter().any(|row| row.paying)
    }

    /// Show a new search result. Outstanding payments no longer map onto these rows.
    pub fn show(&mut self, listing: Listing<PendingBill>) {
        self.searched = true;
        self.rows = match listing {
            Listing::Found(bills) => bills
                .into_iter()
                .map(|bill| PendingRow { bill, paying: false })
                .collect(),
            Listing::Empty => Vec::new(),
        };
    }

    /// Hide the visible row at `index` and return the bill to pay
    pub fn begin_payment(&mut self, index: usize) -> Option<PendingBill> {
        let row = self.rows.iter_mut().filter(|row| !row.paying).nth(index)?;
        row.paying = true;
        Some(row.bill.clone())
    }

    /// The server accepted the payment
    pub fn confirm_payment(&mut self, bill: &PendingBill) -> bool {
        match self.in_flight_position(bill) {
            Some(position) => {
                self.rows.remove(position);
                true
            }
            None => false,
        }
    }

    /// The payment failed: show the row again in its original place.
    /// Returns false when the row belongs to a search that has since been replaced.
    pub fn rollback_payment(&mut self, bill: &PendingBill) -> bool {
        match self.in_flight_position(bill) {
            Some(position) => {
                self.rows[position].paying = false;
                true
            }
            None => false,
        }
    }

    fn in_flight_position(&self, bill: &PendingBill) -> Option<usize> {
        self.rows.iter().position(|row| row.paying && &row.bill == bill)
    }
}
