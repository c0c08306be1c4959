//! Save fetched bytes as a file through a temporary object URL.
//! Requires a browser environment.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("download is only available in the browser")]
    Unavailable,
    #[error("browser refused the download: {0}")]
    Browser(String),
}

/// Trigger a download of `bytes` named `filename`.
///
/// # Errors
///
/// Returns an error if the blob, object URL, or anchor cannot be created.
pub fn save_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js = |e: wasm_bindgen::JsValue| DownloadError::Browser(format!("{e:?}"));

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let bag = web_sys::BlobPropertyBag::new();
        bag.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &bag).map_err(js)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(DownloadError::Unavailable)?;
        let anchor = document
            .create_element("a")
            .map_err(js)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| DownloadError::Browser("anchor element cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, bytes);
        Err(DownloadError::Unavailable)
    }
}
