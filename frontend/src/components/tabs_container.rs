use yew::prelude::*;
use shared::workflow::{Theme, WorkflowTab};
use shared::Client;
use super::forms::{NewBillForm, PayBillForm, PaymentHistoryForm, PendingBillsForm};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct TabsContainerProps {
    pub api_client: ApiClient,
    pub theme: Theme,
    pub clients: Vec<Client>,
    pub clients_loading: bool,
    pub on_reload_clients: Callback<()>,
    /// Fired after the visible workflow changes
    pub on_tab_change: Callback<WorkflowTab>,
}

pub enum Msg {
    Select(WorkflowTab),
}

/// One visible workflow at a time. Switching tabs unmounts the previous form,
/// dropping any input or results it held.
pub struct TabsContainer {
    active: WorkflowTab,
}

impl Component for TabsContainer {
    type Message = Msg;
    type Properties = TabsContainerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: WorkflowTab::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(tab) => {
                if tab == self.active {
                    return false;
                }
                Logger::debug_with_component("tabs", &format!("Switching to {}", tab.title()));
                self.active = tab;
                ctx.props().on_tab_change.emit(tab);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let content = match self.active {
            WorkflowTab::CreateBill => html! {
                <NewBillForm
                    api_client={props.api_client.clone()}
                    clients={props.clients.clone()}
                    clients_loading={props.clients_loading}
                    on_reload_clients={props.on_reload_clients.clone()}
                    theme={props.theme}
                />
            },
            WorkflowTab::PayBill => html! {
                <PayBillForm api_client={props.api_client.clone()} theme={props.theme} />
            },
            WorkflowTab::PendingBills => html! {
                <PendingBillsForm api_client={props.api_client.clone()} theme={props.theme} />
            },
            WorkflowTab::PaymentHistory => html! {
                <PaymentHistoryForm api_client={props.api_client.clone()} theme={props.theme} />
            },
        };

        html! {
            <>
                <nav class="tab-bar">
                    {for WorkflowTab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button
                                key={tab.title()}
                                class={classes!("tab", (tab == self.active).then_some("active"))}
                                onclick={ctx.link().callback(move |_| Msg::Select(tab))}
                            >
                                {tab.title()}
                            </button>
                        }
                    })}
                </nav>

                <section class="tab-content">
                    {content}
                </section>
            </>
        }
    }
}
