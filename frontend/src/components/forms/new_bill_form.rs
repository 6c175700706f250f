use yew::prelude::*;
use shared::validation::{validate_create_bill, ClientIdRule, CreateBillForm};
use shared::workflow::{Submission, Theme};
use shared::{ApiOutcome, Client, PeriodPolicy};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use super::fields::{field_value, read_form, DirectoryClientSelect, ServiceTypeSelect};
use crate::components::form_message::FormMessage;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "new-bill-form";

/// New bills may only be issued for months of this year
pub const CREATE_BILL_PERIODS: PeriodPolicy = PeriodPolicy::FixedYear(2025);

#[derive(Properties, PartialEq)]
pub struct NewBillFormProps {
    pub api_client: ApiClient,
    pub clients: Vec<Client>,
    pub clients_loading: bool,
    pub on_reload_clients: Callback<()>,
    pub theme: Theme,
}

#[function_component(NewBillForm)]
pub fn new_bill_form(props: &NewBillFormProps) -> Html {
    let submission = use_state(Submission::default);
    // Bumped after a successful submit so the form remounts with its default values
    let form_generation = use_state(|| 0u32);

    let on_submit = {
        let api_client = props.api_client.clone();
        let submission = submission.clone();
        let form_generation = form_generation.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submission.is_submitting() {
                return;
            }

            let form: HtmlFormElement = e.target_unchecked_into();
            let data = match read_form(&form) {
                Ok(data) => data,
                Err(message) => {
                    Logger::error_with_component(COMPONENT, &message);
                    submission.set(Submission::rejected(message));
                    return;
                }
            };

            let fields = CreateBillForm {
                client_id: field_value(&data, "clientId"),
                service_type: field_value(&data, "serviceType"),
                billing_period: field_value(&data, "billingPeriod"),
                amount: field_value(&data, "amount"),
            };

            let request = match validate_create_bill(&fields, ClientIdRule::Positive, CREATE_BILL_PERIODS) {
                Ok(request) => request,
                Err(err) => {
                    submission.set(Submission::invalid(&err));
                    return;
                }
            };

            let api_client = api_client.clone();
            let submission = submission.clone();
            let form_generation = form_generation.clone();
            let next_generation = *form_generation + 1;
            submission.set(Submission::Submitting);

            spawn_local(async move {
                match api_client.create_bill(&request).await {
                    Ok(ApiOutcome::Accepted(_)) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Created {} bill {} for client {}", request.service_type, request.billing_period, request.client_id),
                        );
                        form_generation.set(next_generation);
                        submission.set(Submission::Succeeded("Bill created successfully!".to_string()));
                    }
                    Ok(ApiOutcome::Rejected(message)) => {
                        submission.set(Submission::rejected(message));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error creating bill: {}", e));
                        submission.set(Submission::transport(&e));
                    }
                }
            });
        })
    };

    let on_reload = {
        let on_reload_clients = props.on_reload_clients.clone();
        Callback::from(move |_: MouseEvent| on_reload_clients.emit(()))
    };

    let submitting = submission.is_submitting();

    html! {
        <form
            key={*form_generation}
            class={classes!("form-card", props.theme.class_name())}
            onsubmit={on_submit}
            novalidate=true
        >
            <h2>{"Create New Bill"}</h2>

            <FormMessage submission={(*submission).clone()} />

            <DirectoryClientSelect clients={props.clients.clone()} disabled={submitting} />
            <button
                type="button"
                class="btn btn-link reload-clients"
                onclick={on_reload}
                disabled={props.clients_loading}
            >
                {if props.clients_loading { "Loading clients..." } else { "Reload clients" }}
            </button>

            <ServiceTypeSelect disabled={submitting} />

            <div class="form-group">
                <label for="billingPeriod">{"Billing Period"}</label>
                <input
                    type="text"
                    id="billingPeriod"
                    name="billingPeriod"
                    pattern={CREATE_BILL_PERIODS.html_pattern()}
                    placeholder={CREATE_BILL_PERIODS.placeholder()}
                    required=true
                    disabled={submitting}
                />
            </div>

            <div class="form-group">
                <label for="amount">{"Amount"}</label>
                <input
                    type="number"
                    id="amount"
                    name="amount"
                    step="0.1"
                    min="0"
                    required=true
                    disabled={submitting}
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled={submitting}>
                {if submitting { "Creating Bill..." } else { "Create Bill" }}
            </button>
        </form>
    }
}
