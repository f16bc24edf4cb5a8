use crate::console::api::{ConsoleClient, FetchTransport, GroceryApiClient};
use crate::console::state::RequestConsole;
use crate::layout::LayoutMode;
use crate::shared::api_utils::ConsoleConfig;
use contracts::EndpointKind;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Application-wide state, provided once by `App` and copied into components
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub console: RwSignal<RequestConsole>,
    pub layout: RwSignal<LayoutMode>,
    /// Mobile only: show the endpoint list instead of the detail screen
    pub mobile_list_open: RwSignal<bool>,
    client: StoredValue<ConsoleClient>,
}

impl AppGlobalContext {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            console: RwSignal::new(RequestConsole::new()),
            layout: RwSignal::new(LayoutMode::from_window()),
            mobile_list_open: RwSignal::new(true),
            client: StoredValue::new(GroceryApiClient::new(&config.api_base_url, FetchTransport)),
        }
    }

    pub fn select_endpoint(&self, kind: EndpointKind) {
        self.console.update(|c| c.select_endpoint(kind));
        self.mobile_list_open.set(false);
    }

    pub fn set_parameter(&self, name: &str, value: String) {
        self.console.update(|c| c.set_parameter(name, value));
    }

    /// Run the selected endpoint with the current form
    ///
    /// The network call runs on the browser event loop; its outcome is applied
    /// only if the request is still the current one.
    pub fn execute(&self) {
        let Some(pending) = self.console.try_update(|c| c.begin_execute()).flatten() else {
            return;
        };

        let client = self.client.get_value();
        let console = self.console;
        spawn_local(async move {
            let outcome = client.execute(&pending.request).await;
            console.update(|c| {
                c.complete(pending.ticket, outcome);
            });
        });
    }

    /// Drop the shown result or error, keeping the selection and the form
    pub fn clear_response(&self) {
        self.console.update(|c| c.reset());
    }

    pub fn show_endpoint_list(&self) {
        self.mobile_list_open.set(true);
    }

    pub fn refresh_layout(&self) {
        let mode = LayoutMode::from_window();
        if self.layout.get_untracked() != mode {
            log::debug!("layout -> {:?}", mode);
            self.layout.set(mode);
        }
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
