use yew::prelude::*;
use shared::workflow::Theme;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let is_dark = props.theme == Theme::Dark;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            class={classes!("theme-toggle", is_dark.then_some("dark"))}
            onclick={onclick}
            aria-label="Toggle theme"
            title={if is_dark { "Switch to light theme" } else { "Switch to dark theme" }}
        >
            <span class="sr-only">{"Toggle theme"}</span>
            <span class="theme-toggle-knob">
                {if is_dark { "☾" } else { "☀" }}
            </span>
        </button>
    }
}
