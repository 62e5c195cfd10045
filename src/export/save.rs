use crate::error::ExportError;

/// Name of the exported file (on disk or as the browser download name)
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Write the PNG into `dir`. Returns a description of where it went.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(bytes: &[u8], dir: &std::path::Path) -> Result<String, ExportError> {
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(path.display().to_string())
}

/// Offer the PNG as a browser download
#[cfg(target_arch = "wasm32")]
pub fn save_png(bytes: &[u8], _dir: &std::path::Path) -> Result<String, ExportError> {
    use eframe::wasm_bindgen::JsCast as _;

    let fail = |err: eframe::wasm_bindgen::JsValue| ExportError::Download(format!("{err:?}"));

    let window = web_sys::window().ok_or_else(|| ExportError::Download("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob =
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(fail)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(fail)?;

    let anchor = document
        .create_element("a")
        .map_err(fail)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("created element is not an anchor".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(fail)?;

    log::info!("Offered {} bytes as {EXPORT_FILE_NAME}", bytes.len());
    Ok(format!("download {EXPORT_FILE_NAME}"))
}
