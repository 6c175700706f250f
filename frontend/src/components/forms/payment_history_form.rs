use yew::prelude::*;
use shared::validation::{validate_client_lookup, ClientIdRule};
use shared::workflow::{FailureKind, ResultTable, Submission, Theme};
use shared::{ApiOutcome, PaymentRecord};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use super::fields::{field_value, read_form, RosterClientInput};
use crate::components::bills::PaymentHistoryTable;
use crate::components::form_message::FormMessage;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "payment-history-form";

#[derive(Properties, PartialEq)]
pub struct PaymentHistoryFormProps {
    pub api_client: ApiClient,
    pub theme: Theme,
}

#[function_component(PaymentHistoryForm)]
pub fn payment_history_form(props: &PaymentHistoryFormProps) -> Html {
    let history = use_state(ResultTable::<PaymentRecord>::default);
    let search = use_state(Submission::default);

    let on_submit = {
        let api_client = props.api_client.clone();
        let history = history.clone();
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
            let history = history.clone();
            let search = search.clone();
            search.set(Submission::Submitting);

            spawn_local(async move {
                match api_client.list_payment_history(&client_id).await {
                    Ok(ApiOutcome::Accepted(listing)) => {
                        let mut table = ResultTable::default();
                        table.show(listing);
                        history.set(table);
                        search.set(Submission::Idle);
                    }
                    Ok(ApiOutcome::Rejected(message)) => {
                        search.set(Submission::rejected(message));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching paid bills: {}", e));
                        search.set(Submission::transport(&e));
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
                <h2>{"View Payment History"}</h2>

                <FormMessage submission={(*search).clone()} />

                <RosterClientInput disabled={searching} />

                <button type="submit" class="btn btn-primary" disabled={searching}>
                    {if searching { "Fetching..." } else { "Fetch Paid Bills" }}
                </button>
            </form>

            <div class={classes!("results-card", props.theme.class_name())}>
                <PaymentHistoryTable table={(*history).clone()} />
            </div>
        </section>
    }
}
