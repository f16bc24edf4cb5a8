pub mod details;
pub mod list;
pub mod mobile;
pub mod welcome;

use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use details::EndpointDetails;
use leptos::prelude::*;
use list::Sidebar;
use welcome::Welcome;

/// Two-pane console: catalog on the left, selected endpoint on the right
#[component]
pub fn DesktopConsole() -> impl IntoView {
    let ctx = use_app_context();
    // Only re-render the right pane when the selection changes, not on every keystroke
    let selected = Memo::new(move |_| ctx.console.with(|c| c.selected()));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match selected.get() {
                        Some(kind) => view! { <EndpointDetails kind=kind /> }.into_any(),
                        None => view! { <Welcome /> }.into_any(),
                    }}
                }
                .into_any()
            }
        />
    }
}
