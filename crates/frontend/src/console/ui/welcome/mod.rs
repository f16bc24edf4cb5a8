use super::list::CONSOLE_TITLE;
use crate::shared::icons::icon;
use contracts::EndpointKind;
use leptos::prelude::*;

const FEATURES: &[(EndpointKind, &str, &str)] = &[
    (EndpointKind::Search, "search", "Advanced filtering and search capabilities"),
    (EndpointKind::PriceHistory, "trending", "Track historical price changes over time"),
    (EndpointKind::BarcodeLookup, "barcode", "Find products by barcode or GTIN"),
];

/// Shown in the content pane until an endpoint is selected
#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div class="welcome">
            <div class="welcome__content">
                <h2 class="welcome__title">"Welcome to " {CONSOLE_TITLE}</h2>
                <p class="welcome__text">
                    "Select an endpoint from the left sidebar to start exploring the API \
                     documentation and testing endpoints."
                </p>
                <div class="welcome__features">
                    {FEATURES
                        .iter()
                        .map(|(kind, icon_name, text)| view! {
                            <div class="feature-card">
                                <span class="feature-card__icon">{icon(icon_name)}</span>
                                <div>
                                    <h4 class="feature-card__title">{kind.display_name()}</h4>
                                    <p class="feature-card__text">{*text}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
