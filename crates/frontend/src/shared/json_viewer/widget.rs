use crate::shared::icons::icon;
use leptos::prelude::*;
use serde_json::Value;

/// Two-space indented JSON, like `JSON.stringify(v, null, 2)`
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[component]
pub fn JsonViewer(
    /// Value to display
    value: Value,
    /// File name offered by the download button
    #[prop(optional, into)]
    file_name: Option<String>,
    /// CSS max-height of the scroll area
    #[prop(optional, into)]
    max_height: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let json_content = pretty_json(&value);
    let json_content_for_copy = json_content.clone();
    let json_content_for_download = json_content.clone();
    let char_count = json_content.chars().count();
    let line_count = json_content.lines().count();
    let file_name = file_name.unwrap_or_else(|| "response.json".to_string());
    let max_height = max_height.unwrap_or_else(|| "600px".to_string());

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        let content = json_content_for_copy.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let promise = clipboard.write_text(&content);
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {:?}", e);
            }
        });
        set_copied.set(true);

        // Reset the label after 2 seconds
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            set_copied.set(false);
        });
    };

    let handle_download = move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let blob_parts = js_sys::Array::new();
        blob_parts.push(&wasm_bindgen::JsValue::from_str(&json_content_for_download));

        let blob_property_bag = web_sys::BlobPropertyBag::new();
        blob_property_bag.set_type("application/json");

        let Ok(blob) =
            web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_property_bag)
        else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };

        if let Ok(a) = document.create_element("a") {
            use wasm_bindgen::JsCast;
            if let Ok(link) = a.dyn_into::<web_sys::HtmlAnchorElement>() {
                link.set_href(&url);
                link.set_download(&file_name);
                link.click();
            }
        }
        web_sys::Url::revoke_object_url(&url).ok();
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <div class="json-viewer__actions">
                    <button
                        class="button button--secondary button--small"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! {
                                <>
                                    {icon("check")}
                                    {"Copied!"}
                                </>
                            }.into_any()
                        } else {
                            view! {
                                <>
                                    {icon("copy")}
                                    {"Copy"}
                                </>
                            }.into_any()
                        }}
                    </button>
                    <button
                        class="button button--ghost button--small"
                        on:click=handle_download
                        title="Download as file"
                    >
                        {icon("download")}
                        {"Download"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body" style:max-height=max_height>
                <pre class="json-viewer__content">
                    {json_content}
                </pre>
            </div>

            <div class="json-viewer__footer">
                {"Size: "}
                <strong>{format!("{} chars", char_count)}</strong>
                {" | "}
                {"Lines: "}
                <strong>{line_count}</strong>
            </div>
        </div>
    }
}
