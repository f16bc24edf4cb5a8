use crate::console::ui::mobile::MobileConsole;
use crate::console::ui::DesktopConsole;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::LayoutMode;
use crate::shared::api_utils::ConsoleConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_env();

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(&config);
    provide_context(config);
    provide_context(ctx);

    // Re-evaluate the layout on every resize, no debounce
    let _ = window_event_listener(leptos::ev::resize, move |_| ctx.refresh_layout());

    view! {
        {move || match ctx.layout.get() {
            LayoutMode::Mobile => view! { <MobileConsole /> }.into_any(),
            LayoutMode::Desktop => view! { <DesktopConsole /> }.into_any(),
        }}
    }
}
