use crate::console::state::RequestStatus;
use crate::layout::global_context::use_app_context;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::json_viewer::JsonViewer;
use leptos::prelude::*;

/// Result of the last request: spinner, error, JSON or a placeholder
#[component]
pub fn ResponseCard(
    /// CSS max-height of the JSON / error area
    #[prop(optional, into)]
    max_height: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let max_height = max_height.unwrap_or_else(|| "600px".to_string());
    let status = Memo::new(move |_| ctx.console.with(|c| c.status()));
    let clear_button = move || {
        view! {
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_| ctx.clear_response())
            >
                "Clear"
            </Button>
        }
    };

    view! {
        <div class="response-card">
            {move || {
                let max_height = max_height.clone();
                match status.get() {
                    RequestStatus::Loading => view! {
                        <h3 class="response-card__title">"Response"</h3>
                        <div class="response-card__loading">
                            <div class="spinner"></div>
                            <span>"Loading response..."</span>
                        </div>
                    }
                    .into_any(),
                    RequestStatus::Error => {
                        let message = ctx
                            .console
                            .with(|c| c.state().error_message.clone())
                            .unwrap_or_default();
                        view! {
                            <div class="response-card__header">
                                <h3 class="response-card__title response-card__title--error">"Error"</h3>
                                {clear_button()}
                            </div>
                            <pre class="response-card__error" style:max-height=max_height>
                                {message}
                            </pre>
                        }
                        .into_any()
                    }
                    RequestStatus::Success => {
                        let payload = ctx
                            .console
                            .with(|c| c.state().result.clone())
                            .unwrap_or_default();
                        view! {
                            <div class="response-card__header">
                                <h3 class="response-card__title">"Response"</h3>
                                <div class="response-card__actions">
                                    <Badge variant="success">"Success"</Badge>
                                    {clear_button()}
                                </div>
                            </div>
                            <JsonViewer value=payload max_height=max_height />
                        }
                        .into_any()
                    }
                    RequestStatus::Idle => view! {
                        <h3 class="response-card__title">"Response"</h3>
                        <div class="response-card__empty">
                            "No response data available. Execute a request to see results."
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
