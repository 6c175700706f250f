use yew::prelude::*;
use shared::workflow::{FailureKind, Submission};

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub submission: Submission,
}

/// Inline status line under a form heading
#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    if let Submission::Succeeded(message) = &props.submission {
        return html! {
            <div class="form-message success">{message}</div>
        };
    }

    let Some((kind, message)) = props.submission.failure() else {
        return html! {};
    };

    let class = match kind {
        FailureKind::Invalid => "form-message info",
        FailureKind::Transport => "form-message error transport",
        FailureKind::Rejected => "form-message error",
    };

    html! {
        <div class={class} role="alert">{message}</div>
    }
}
