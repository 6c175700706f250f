use std::rc::Rc;
use yew::prelude::*;
use shared::workflow::{PendingBillsView, Submission};
use shared::{Listing, PendingBill};

pub enum PendingBillsAction {
    Show(Listing<PendingBill>),
    BeginPayment(usize),
    ConfirmPayment(PendingBill),
    RollbackPayment { bill: PendingBill, failure: Submission },
}

/// Reducer wrapper so async tasks always act on the latest table.
///
/// `payment` is the status line for the most recent pay action. Replies for
/// rows of an earlier search leave it untouched.
#[derive(Default, PartialEq)]
pub struct PendingBillsState {
    pub view: PendingBillsView,
    pub payment: Submission,
}

impl Reducible for PendingBillsState {
    type Action = PendingBillsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = self.view.clone();
        let mut payment = self.payment.clone();

        match action {
            PendingBillsAction::Show(listing) => {
                view.show(listing);
                payment = Submission::Idle;
            }
            PendingBillsAction::BeginPayment(index) => {
                if view.begin_payment(index).is_some() {
                    payment = Submission::Submitting;
                }
            }
            PendingBillsAction::ConfirmPayment(bill) => {
                if view.confirm_payment(&bill) {
                    payment = Submission::Succeeded("Bill paid successfully!".to_string());
                }
            }
            PendingBillsAction::RollbackPayment { bill, failure } => {
                if view.rollback_payment(&bill) {
                    payment = failure;
                }
            }
        }

        Rc::new(Self { view, payment })
    }
}

#[hook]
pub fn use_pending_bills() -> UseReducerHandle<PendingBillsState> {
    use_reducer(PendingBillsState::default)
}
