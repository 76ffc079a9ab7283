//! Browser file pickers and downloads.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlInputElement, Url};

fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Read the first file chosen in `input` as text and hand it to `on_text`.
///
/// The input is cleared immediately so choosing the same file again still
/// fires `change`. Returns `false` if no file was chosen.
pub fn read_selected_text(input: &HtmlInputElement, on_text: impl FnOnce(Result<String, String>) + 'static) -> bool {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return false;
    };
    input.set_value("");
    leptos::task::spawn_local(async move {
        let text = JsFuture::from(file.text())
            .await
            .map_err(js_err)
            .and_then(|value| value.as_string().ok_or_else(|| "file contents are not text".to_owned()));
        on_text(text);
    });
    true
}

/// Offer `contents` as a download named `file_name`.
///
/// # Errors
///
/// Returns the browser's message if the blob, object URL, or anchor cannot be
/// created.
pub fn download_json(file_name: &str, contents: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor: HtmlAnchorElement = document.create_element("a").map_err(js_err)?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_err)
}
