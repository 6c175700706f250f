use yew::prelude::*;
use shared::workflow::Theme;
use super::theme_toggle::ThemeToggle;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Basic Services Payment App"}</h1>
                <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
            </div>
        </header>
    }
}
