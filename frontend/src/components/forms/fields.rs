//! Inputs shared by several forms and helpers for reading submitted values.

use yew::prelude::*;
use shared::validation::ClientIdRule;
use shared::{Client, ServiceType};
use web_sys::{FormData, HtmlFormElement};

/// Snapshot the fields of a submitted form
pub fn read_form(form: &HtmlFormElement) -> Result<FormData, String> {
    FormData::new_with_form(form).map_err(|e| format!("Could not read form: {:?}", e))
}

/// String value of a named field, empty when missing
pub fn field_value(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ServiceTypeSelectProps {
    pub disabled: bool,
}

#[function_component(ServiceTypeSelect)]
pub fn service_type_select(props: &ServiceTypeSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label for="serviceType">{"Service Type"}</label>
            <select id="serviceType" name="serviceType" required=true disabled={props.disabled}>
                <option value="" disabled=true selected=true>{"Select a service type"}</option>
                {for ServiceType::ALL.iter().map(|service| html! {
                    <option value={service.label()}>{service.label()}</option>
                })}
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RosterClientInputProps {
    pub disabled: bool,
}

/// Manual client id entry limited to the fixed roster
#[function_component(RosterClientInput)]
pub fn roster_client_input(props: &RosterClientInputProps) -> Html {
    let rule = ClientIdRule::ROSTER;
    let (min, max, step) = match rule {
        ClientIdRule::Roster { min, max, step } => (min, max, step),
        ClientIdRule::Positive => (1, u32::MAX, 1),
    };

    html! {
        <div class="form-group">
            <label for="clientId">{"Client ID"}</label>
            <input
                type="number"
                id="clientId"
                name="clientId"
                min={min.to_string()}
                max={max.to_string()}
                step={step.to_string()}
                value={rule.default_value()}
                required=true
                disabled={props.disabled}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DirectoryClientSelectProps {
    pub clients: Vec<Client>,
    pub disabled: bool,
}

/// Client picker backed by the directory, or a plain id field when the directory is empty
#[function_component(DirectoryClientSelect)]
pub fn directory_client_select(props: &DirectoryClientSelectProps) -> Html {
    if props.clients.is_empty() {
        return html! {
            <div class="form-group">
                <label for="clientId">{"Client ID"}</label>
                <input
                    type="number"
                    id="clientId"
                    name="clientId"
                    min="1"
                    step="1"
                    placeholder="Client directory unavailable, enter an ID"
                    required=true
                    disabled={props.disabled}
                />
            </div>
        };
    }

    html! {
        <div class="form-group">
            <label for="clientId">{"Client ID"}</label>
            <select id="clientId" name="clientId" required=true disabled={props.disabled}>
                <option value="" disabled=true selected=true>{"Select a client"}</option>
                {for props.clients.iter().map(|client| html! {
                    <option key={client.id} value={client.id.to_string()}>{&client.name}</option>
                })}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_field_value() {
        let data = FormData::new().unwrap();
        data.append_with_str("billingPeriod", "202503").unwrap();

        assert_eq!(field_value(&data, "billingPeriod"), "202503");
        assert_eq!(field_value(&data, "amount"), "");
    }

    #[wasm_bindgen_test]
    fn test_read_form_collects_named_inputs() {
        let document = gloo::utils::document();
        let form: HtmlFormElement = document.create_element("form").unwrap().unchecked_into();
        form.set_inner_html(r#"<input name="clientId" value="300"><select name="serviceType"><option value="Rent" selected>Rent</option></select>"#);

        let data = read_form(&form).unwrap();
        assert_eq!(field_value(&data, "clientId"), "300");
        assert_eq!(field_value(&data, "serviceType"), "Rent");
    }
}
