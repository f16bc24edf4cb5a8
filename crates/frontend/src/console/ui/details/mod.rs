pub mod parameter_card;
pub mod response_card;

use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Button, MethodBadge};
use crate::shared::icons::icon;
use crate::shared::json_viewer::pretty_json;
use contracts::catalog::descriptor;
use contracts::EndpointKind;
use leptos::prelude::*;
use parameter_card::ParameterInputCard;
use response_card::ResponseCard;

/// Selected endpoint: header, parameter form, execute button, result, example
#[component]
pub fn EndpointDetails(
    kind: EndpointKind,
    /// Single-column variant used by the mobile layout
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let endpoint = descriptor(kind);
    let is_loading = Signal::derive(move || ctx.console.with(|c| c.is_loading()));

    let parameters = endpoint
        .parameters
        .iter()
        .map(|spec| view! { <ParameterInputCard spec=*spec /> })
        .collect_view();

    view! {
        <div class="endpoint-details" class:endpoint-details--compact=compact>
            <div class="endpoint-details__header">
                <h2 class="endpoint-details__title">
                    <MethodBadge method=endpoint.method />
                    <span class="endpoint-details__path">{endpoint.path}</span>
                </h2>
                <p class="endpoint-details__description">{endpoint.description}</p>
            </div>

            <section class="endpoint-details__section">
                <h3 class="endpoint-details__section-title">{icon("settings")} "Parameters"</h3>
                <div class="param-grid" class:param-grid--single=compact>
                    {parameters}
                </div>
            </section>

            <div class="endpoint-details__actions">
                <Button
                    size=if compact { "block" } else { "md" }
                    disabled=is_loading
                    on_click=Callback::new(move |_| ctx.execute())
                >
                    {icon("play")}
                    {move || if is_loading.get() { "Executing..." } else { "Execute Request" }}
                </Button>
            </div>

            <ResponseCard max_height=if compact { "400px" } else { "500px" } />

            <ExamplePanel kind=kind />
        </div>
    }
}

/// Documented example request and response of an endpoint
#[component]
fn ExamplePanel(kind: EndpointKind) -> impl IntoView {
    let example = &descriptor(kind).example;

    view! {
        <section class="endpoint-details__section example-panel">
            <h3 class="endpoint-details__section-title">"Example"</h3>
            <div class="example-panel__grid">
                <div>
                    <h4 class="example-panel__label">"Request parameters"</h4>
                    <pre class="example-panel__code">{pretty_json(&example.request)}</pre>
                </div>
                <div>
                    <h4 class="example-panel__label">"Response"</h4>
                    <pre class="example-panel__code">{pretty_json(&example.response)}</pre>
                </div>
            </div>
        </section>
    }
}
