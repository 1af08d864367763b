//! Saving server-generated files (CSV exports) through the browser
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::api_utils::ApiError;

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// Wraps `bytes` in a Blob and hands it to the browser as a download.
///
/// The temporary object URL is revoked whether or not the click succeeded.
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), ApiError> {
    let blob = create_blob(bytes, mime)?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| browser_error("create object URL", e))?;

    let clicked = click_download_link(&url, filename);

    Url::revoke_object_url(&url).map_err(|e| browser_error("revoke URL", e))?;
    clicked
}

fn create_blob(bytes: &[u8], mime: &str) -> Result<Blob, ApiError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| browser_error("create blob", e))
}

fn click_download_link(url: &str, filename: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ApiError::Browser("No document object".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("No body element".into()))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser_error("create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser_error("cast to anchor", e.into()))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| browser_error("set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| browser_error("append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| browser_error("remove anchor", e))?;

    Ok(())
}

fn browser_error(action: &str, err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("Failed to {}: {:?}", action, err))
}
