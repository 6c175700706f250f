use yew::prelude::*;
use shared::validation::{validate_client_lookup, ClientIdRule};
use shared::workflow::{FailureKind, Submission, Theme};
use shared::{ApiOutcome, PayBillRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use super::fields::{field_value, read_form, RosterClientInput};
use crate::components::bills::PendingBillsTable;
use crate::components::form_message::FormMessage;
use crate::hooks::use_pending_bills::{use_pending_bills, PendingBillsAction};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "pending-bills-form";

#[derive(Properties, PartialEq)]
pub struct PendingBillsFormProps {
    pub api_client: ApiClient,
    pub theme: Theme,
}

#[function_component(PendingBillsForm)]
pub fn pending_bills_form(props: &PendingBillsFormProps) -> Html {
    let pending = use_pending_bills();
    let search = use_state(Submission::default);

    let on_submit = {
        let api_client = props.api_client.clone();
        let pending = pending.clone();
        let search = search.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if search.is_submitting() {
                return;
            }

            let form: HtmlFormElement = e.target_unchecked_into();
            let client_id = match read_form(&form)
                .map(|data| field_value(&data, "clientId"))
                .and_then(|raw| validate_client_lookup(&raw, ClientIdRule::ROSTER).map_err(|err| err.to_string()))
            {
                Ok(client_id) => client_id,
                Err(message) => {
                    search.set(Submission::Failed(FailureKind::Invalid, message));
                    return;
                }
            };

            let api_client = api_client.clone();
            let pending = pending.clone();
            let search = search.clone();
            search.set(Submission::Submitting);

            spawn_local(async move {
                match api_client.list_pending_bills(&client_id).await {
                    Ok(ApiOutcome::Accepted(listing)) => {
                        pending.dispatch(PendingBillsAction::Show(listing));
                        search.set(Submission::Idle);
                    }
                    Ok(ApiOutcome::Rejected(message)) => {
                        search.set(Submission::rejected(message));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching pending bills: {}", e));
                        search.set(Submission::transport(&e));
                    }
                }
            });
        })
    };

    // Optimistic: the row leaves the table before the server answers and comes back if the payment fails
    let on_pay = {
        let api_client = props.api_client.clone();
        let pending = pending.clone();

        Callback::from(move |index: usize| {
            let Some(bill) = pending.view.rows().into_iter().nth(index) else {
                return;
            };

            pending.dispatch(PendingBillsAction::BeginPayment(index));

            let api_client = api_client.clone();
            let pending = pending.clone();

            spawn_local(async move {
                match api_client.pay_bill(&PayBillRequest::from(&bill)).await {
                    Ok(ApiOutcome::Accepted(_)) => {
                        pending.dispatch(PendingBillsAction::ConfirmPayment(bill));
                    }
                    Ok(ApiOutcome::Rejected(message)) => {
                        pending.dispatch(PendingBillsAction::RollbackPayment {
                            bill,
                            failure: Submission::rejected(message),
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error paying bill: {}", e));
                        pending.dispatch(PendingBillsAction::RollbackPayment {
                            bill,
                            failure: Submission::transport(&e),
                        });
                    }
                }
            });
        })
    };

    let searching = search.is_submitting();

    html! {
        <section class="listing-section">
            <form
                class={classes!("form-card", props.theme.class_name())}
                onsubmit={on_submit}
                novalidate=true
            >
                <h2>{"View Pending Bills"}</h2>

                <FormMessage submission={(*search).clone()} />

                <RosterClientInput disabled={searching} />

                <button type="submit" class="btn btn-primary" disabled={searching}>
                    {if searching { "Searching..." } else { "Search Pending Bills" }}
                </button>
            </form>

            <div class={classes!("results-card", props.theme.class_name())}>
                <FormMessage submission={pending.payment.clone()} />
                <PendingBillsTable table={pending.view.table()} on_pay={on_pay} />
            </div>
        </section>
    }
}
