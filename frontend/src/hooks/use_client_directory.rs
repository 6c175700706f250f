use yew::prelude::*;
use shared::directory::ClientDirectory;
use shared::ApiOutcome;
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "client-directory";

#[derive(Clone, PartialEq)]
pub struct ClientDirectoryState {
    pub directory: ClientDirectory,
    pub loading: bool,
}

pub struct UseClientDirectoryResult {
    pub state: ClientDirectoryState,
    pub actions: UseClientDirectoryActions,
}

#[derive(Clone, PartialEq)]
pub struct UseClientDirectoryActions {
    /// Re-fetch unconditionally
    pub refresh: Callback<()>,
    /// Re-fetch only when the cached copy has outlived its TTL
    pub refresh_if_stale: Callback<()>,
}

/// Client directory shared by every workflow.
///
/// Loaded once on mount and afterwards on demand. A failed fetch is logged and
/// keeps whatever was cached before, so forms fall back to manual id entry
/// only when nothing was ever loaded.
#[hook]
pub fn use_client_directory(api_client: &ApiClient, ttl_secs: u32) -> UseClientDirectoryResult {
    let directory = use_state(|| ClientDirectory::new(ttl_secs));
    let loading = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let directory = directory.clone();
        let loading = loading.clone();

        use_callback(ttl_secs, move |_, ttl_secs| {
            let api_client = api_client.clone();
            let directory = directory.clone();
            let loading = loading.clone();
            let ttl_secs = *ttl_secs;

            spawn_local(async move {
                loading.set(true);

                match api_client.list_clients().await {
                    Ok(ApiOutcome::Accepted(clients)) => {
                        Logger::debug_with_component(COMPONENT, &format!("Loaded {} clients", clients.len()));
                        let mut fresh = ClientDirectory::new(ttl_secs);
                        fresh.replace(clients, js_sys::Date::now());
                        directory.set(fresh);
                    }
                    Ok(ApiOutcome::Rejected(message)) => {
                        Logger::warn_with_component(COMPONENT, &format!("Client directory rejected: {}", message));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to fetch client directory: {}", e));
                    }
                }

                loading.set(false);
            });
        })
    };

    let refresh_if_stale = {
        let refresh = refresh.clone();

        use_callback(((*directory).clone(), *loading), move |_, (directory, loading)| {
            if !*loading && directory.is_stale(js_sys::Date::now()) {
                Logger::debug_with_component(COMPONENT, "Cached directory is stale, refreshing");
                refresh.emit(());
            }
        })
    };

    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = ClientDirectoryState {
        directory: (*directory).clone(),
        loading: *loading,
    };

    let actions = UseClientDirectoryActions {
        refresh,
        refresh_if_stale,
    };

    UseClientDirectoryResult { state, actions }
}
