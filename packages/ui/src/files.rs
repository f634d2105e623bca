//! Getting files into and out of the dashboard.

use api::Upload;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::prelude::*;

fn guess_content_type(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        Some(ext) if ext == "svg" => "image/svg+xml",
        _ => "image/png",
    }
}

/// Every file picked in a file input.
pub async fn picked_uploads(evt: &FormEvent) -> Vec<Upload> {
    let mut uploads = Vec::new();
    for file in evt.files() {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let content_type = file
                    .content_type()
                    .filter(|ct| !ct.is_empty())
                    .unwrap_or_else(|| guess_content_type(&name).to_string());
                uploads.push(Upload::new(name, content_type, bytes.to_vec()));
            }
            Err(e) => tracing::warn!("could not read {name}: {e}"),
        }
    }
    uploads
}

/// The first file picked, if any.
pub async fn picked_upload(evt: &FormEvent) -> Option<Upload> {
    picked_uploads(evt).await.into_iter().next()
}

/// Inline `data:` URL for previewing an upload before it is sent.
pub fn preview_url(upload: &Upload) -> String {
    format!(
        "data:{};base64,{}",
        upload.content_type,
        STANDARD.encode(&upload.bytes)
    )
}

/// Hand `bytes` to the user as a download named `filename`.
///
/// In the browser this clicks a temporary object-URL link; natively the file
/// lands in the user's downloads folder. Returns where it went.
pub fn save_download(filename: &str, mime: &str, bytes: &[u8]) -> Result<String, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "not an anchor".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(filename.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = dirs::download_dir().unwrap_or_else(std::env::temp_dir);
        let path = dir.join(filename);
        std::fs::write(&path, bytes).map_err(|e| e.to_string())?;
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_image_types() {
        assert_eq!(guess_content_type("a.JPG"), "image/jpeg");
        assert_eq!(guess_content_type("a.webp"), "image/webp");
        assert_eq!(guess_content_type("noext"), "image/png");
    }

    #[test]
    fn preview_is_data_url() {
        let upload = Upload::new("a.png", "image/png", vec![1, 2, 3]);
        assert_eq!(preview_url(&upload), "data:image/png;base64,AQID");
    }
}
