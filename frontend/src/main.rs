use yew::prelude::*;
use shared::config::AppConfig;
use shared::workflow::WorkflowTab;

mod components;
mod hooks;
mod services;

use components::config_error::ConfigError;
use components::header::Header;
use components::tabs_container::TabsContainer;
use hooks::use_client_directory::use_client_directory;
use hooks::use_theme::use_theme;
use services::api::ApiClient;
use services::logging::Logger;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.api_base_url.clone(), |base_url| {
        ApiClient::new(base_url.clone())
    });

    let theme = use_theme();
    let clients = use_client_directory(&api_client, props.config.directory_ttl_secs);

    // The create form is the only consumer of the directory, so a stale copy
    // is refreshed when it becomes visible again.
    let on_tab_change = {
        let refresh_if_stale = clients.actions.refresh_if_stale.clone();
        Callback::from(move |tab: WorkflowTab| {
            if tab == WorkflowTab::CreateBill {
                refresh_if_stale.emit(());
            }
        })
    };

    html! {
        <div class="app">
            <Header theme={theme.theme} on_toggle_theme={theme.toggle.clone()} />

            <main class="main">
                <div class="container">
                    <TabsContainer
                        api_client={(*api_client).clone()}
                        theme={theme.theme}
                        clients={clients.state.directory.clients().to_vec()}
                        clients_loading={clients.state.loading}
                        on_reload_clients={clients.actions.refresh.clone()}
                        on_tab_change={on_tab_change}
                    />
                </div>
            </main>
        </div>
    }
}

fn main() {
    match services::config::load() {
        Ok(config) => {
            Logger::init(config.log_level);
            Logger::info_with_component(
                "app",
                &format!("Starting against {}", config.api_base_url),
            );
            yew::Renderer::<App>::with_props(AppProps { config }).render();
        }
        Err(e) => {
            let message = format!("{e:#}");
            Logger::error_with_component("app", &message);
            yew::Renderer::<ConfigError>::with_props(components::config_error::ConfigErrorProps { message })
                .render();
        }
    }
}
