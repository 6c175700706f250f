use yew::prelude::*;
use shared::validation::{validate_pay_bill, ClientIdRule, PayBillForm as PayBillFields};
use shared::workflow::{Submission, Theme};
use shared::{ApiOutcome, PeriodPolicy};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;

use super::fields::{field_value, read_form, RosterClientInput, ServiceTypeSelect};
use crate::components::form_message::FormMessage;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "pay-bill-form";

#[derive(Properties, PartialEq)]
pub struct PayBillFormProps {
    pub api_client: ApiClient,
    pub theme: Theme,
}

#[function_component(PayBillForm)]
pub fn pay_bill_form(props: &PayBillFormProps) -> Html {
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

            let fields = PayBillFields {
                client_id: field_value(&data, "clientId"),
                service_type: field_value(&data, "serviceType"),
                billing_period: field_value(&data, "billingPeriod"),
            };

            let request = match validate_pay_bill(&fields, ClientIdRule::ROSTER, PeriodPolicy::AnyYear) {
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
                match api_client.pay_bill(&request).await {
                    Ok(ApiOutcome::Accepted(_)) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Paid {} bill {} for client {}", request.service_type, request.billing_period, request.client_id),
                        );
                        form_generation.set(next_generation);
                        submission.set(Submission::Succeeded("Bill paid successfully!".to_string()));
                    }
                    Ok(ApiOutcome::Rejected(message)) => {
                        submission.set(Submission::rejected(message));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error paying bill: {}", e));
                        submission.set(Submission::transport(&e));
                    }
                }
            });
        })
    };

    let submitting = submission.is_submitting();

    html! {
        <form
            key={*form_generation}
            class={classes!("form-card", props.theme.class_name())}
            onsubmit={on_submit}
            novalidate=true
        >
            <h2>{"Pay Existing Bill"}</h2>

            <FormMessage submission={(*submission).clone()} />

            <RosterClientInput disabled={submitting} />
            <ServiceTypeSelect disabled={submitting} />

            <div class="form-group">
                <label for="billingPeriod">{"Billing Period"}</label>
                <input
                    type="text"
                    id="billingPeriod"
                    name="billingPeriod"
                    pattern={PeriodPolicy::AnyYear.html_pattern()}
                    placeholder={PeriodPolicy::AnyYear.placeholder()}
                    required=true
                    disabled={submitting}
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled={submitting}>
                {if submitting { "Paying Bill..." } else { "Pay Bill" }}
            </button>
        </form>
    }
}
