use leptos::prelude::*;

/// Fixed-width sidebar of the desktop layout
#[component]
pub fn Left(children: Children) -> impl IntoView {
    view! {
        <aside data-zone="left" class="left">
            {children()}
        </aside>
    }
}
