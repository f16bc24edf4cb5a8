use leptos::prelude::*;

/// Text input bound to a string signal
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Virtual keyboard hint: "text" (default), "decimal", "numeric"
    #[prop(optional, into)]
    input_mode: MaybeProp<String>,
    /// ID of the element describing this input
    #[prop(optional, into)]
    described_by: MaybeProp<String>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_mode = move || input_mode.get().unwrap_or_else(|| "text".to_string());
    let described_by = move || described_by.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            id=input_id
            class=move || format!("form__input {}", additional_class())
            type="text"
            inputmode=input_mode
            aria-describedby=described_by
            prop:value=move || value.get()
            placeholder=input_placeholder
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
