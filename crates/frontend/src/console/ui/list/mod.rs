use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::MethodBadge;
use crate::shared::icons::icon;
use contracts::catalog::{endpoints, EndpointDescriptor};
use leptos::prelude::*;

pub const CONSOLE_TITLE: &str = "OzGroceries API";

/// Clickable list of every catalog endpoint
#[component]
pub fn EndpointList(
    /// Show a chevron on each card (mobile navigation)
    #[prop(optional)]
    with_chevron: bool,
) -> impl IntoView {
    view! {
        <div class="endpoint-list">
            {endpoints()
                .iter()
                .map(|endpoint| view! { <EndpointCard endpoint=endpoint with_chevron=with_chevron /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn EndpointCard(endpoint: &'static EndpointDescriptor, with_chevron: bool) -> impl IntoView {
    let ctx = use_app_context();
    let kind = endpoint.kind;
    let is_selected = move || ctx.console.with(|c| c.selected() == Some(kind));

    view! {
        <button
            type="button"
            class="endpoint-card"
            class:endpoint-card--selected=is_selected
            on:click=move |_| ctx.select_endpoint(kind)
        >
            <div class="endpoint-card__route">
                <MethodBadge method=endpoint.method />
                <span class="endpoint-card__path">{endpoint.path}</span>
                {with_chevron.then(|| view! {
                    <span class="endpoint-card__chevron">{icon("chevron-right")}</span>
                })}
            </div>
            <p class="endpoint-card__description">{endpoint.description}</p>
        </button>
    }
}

/// Desktop sidebar: title, disclaimer and the endpoint list
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="sidebar">
            <div class="sidebar__header">
                <h1 class="sidebar__title">{CONSOLE_TITLE} " (Beta)"</h1>
                <p class="sidebar__subtitle">
                    "Explore a simple API for fetching Australian grocery data from major retailers."
                </p>
            </div>
            <div class="sidebar__body">
                <Disclaimer />
                <section class="sidebar__section">
                    <h2 class="sidebar__section-title">"Available Endpoints"</h2>
                    <EndpointList />
                </section>
            </div>
        </div>
    }
}

#[component]
fn Disclaimer() -> impl IntoView {
    view! {
        <section class="sidebar__section">
            <h2 class="sidebar__section-title">"Disclaimer"</h2>
            <div class="disclaimer">
                <p>
                    "OzGroceries API is a public, community-maintained service that aggregates \
                     publicly available product and pricing information from major Australian \
                     grocery retailers."
                </p>
                <ul class="disclaimer__list">
                    <li>"Not affiliated with, sponsored by, or endorsed by any retailer."</li>
                    <li>
                        "Data is provided \u{201c}as is\u{201d} and may be incomplete, inaccurate, \
                         or change without notice."
                    </li>
                    <li>
                        "For informational use only; ensure compliance with applicable laws and \
                         retailer terms."
                    </li>
                </ul>
            </div>
        </section>
    }
}
