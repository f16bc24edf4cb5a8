use super::details::EndpointDetails;
use super::list::{EndpointList, CONSOLE_TITLE};
use crate::layout::global_context::use_app_context;
use crate::layout::MobileShell;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single-column console: endpoint list screen, then a detail screen
#[component]
pub fn MobileConsole() -> impl IntoView {
    let ctx = use_app_context();
    let selected = Memo::new(move |_| ctx.console.with(|c| c.selected()));
    let show_list = Memo::new(move |_| ctx.mobile_list_open.get() || selected.get().is_none());

    view! {
        <MobileShell>
            {move || match (show_list.get(), selected.get()) {
                (false, Some(kind)) => view! {
                    <div class="mobile-screen">
                        <Button
                            variant="secondary"
                            on_click=Callback::new(move |_| ctx.show_endpoint_list())
                        >
                            {icon("arrow-left")}
                            "Back to Endpoints"
                        </Button>
                        <EndpointDetails kind=kind compact=true />
                    </div>
                }
                .into_any(),
                _ => view! {
                    <div class="mobile-screen">
                        <div class="mobile-header">
                            <h1 class="mobile-header__title">{CONSOLE_TITLE}</h1>
                            <p class="mobile-header__text">
                                "Explore and test the OzGroceries API endpoints for Australian \
                                 grocery product data."
                            </p>
                        </div>
                        <h2 class="mobile-screen__section-title">"Available Endpoints"</h2>
                        <EndpointList with_chevron=true />
                    </div>
                }
                .into_any(),
            }}
        </MobileShell>
    }
}
