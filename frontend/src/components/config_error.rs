use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Rendered instead of the app when startup configuration is missing or invalid
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <main class="main config-error">
            <h1>{"Basic Services Payment App"}</h1>
            <div class="form-message error" role="alert">
                <p>{&props.message}</p>
                <p>{"Set BILLING_API_URL to the billing API base URL and rebuild the app."}</p>
            </div>
        </main>
    }
}
