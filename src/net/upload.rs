//! Image upload to the hosting collaborator.
//!
//! Uploads go straight from the browser to the image host as unsigned
//! multipart posts (`file` + `upload_preset`), so image bytes never transit
//! our backend. The hosted HTTPS URL comes back and is stored as a plain
//! string field on communities, posts, and profiles.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::error::status_error;
#[cfg(not(feature = "hydrate"))]
use crate::net::session_client::not_in_browser;

#[cfg(feature = "hydrate")]
const UPLOAD_ENDPOINT: &str = "https://api.cloudinary.com/v1_1/knoword/image/upload";
#[cfg(feature = "hydrate")]
const UPLOAD_PRESET: &str = "knoword_unsigned";

/// Name of the file currently selected in a file input, for widget labels.
/// `None` off-browser or when nothing is selected.
#[must_use]
pub fn selected_file_name(input_id: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let file = file_input(input_id)?.files()?.get(0)?;
        Some(file.name())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_id;
        None
    }
}

/// Upload the file selected in the `input_id` file input.
///
/// Returns `Ok(None)` when no file is selected, `Ok(Some(url))` with the
/// hosted HTTPS URL on success.
///
/// # Errors
///
/// Returns an [`ApiError`] for transport failures and rejected uploads.
pub async fn upload_image(input_id: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let Some(file) = file_input(input_id).and_then(|input| input.files()?.get(0)) else {
            return Ok(None);
        };
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob("file", &file).map_err(js_error)?;
        form.append_with_str("upload_preset", UPLOAD_PRESET).map_err(js_error)?;

        let response = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(response.status(), &body));
        }

        #[derive(serde::Deserialize)]
        struct UploadResponse {
            secure_url: String,
        }
        let body: UploadResponse =
            response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Some(body.secure_url))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input_id;
        Err(not_in_browser())
    }
}

#[cfg(feature = "hydrate")]
fn file_input(input_id: &str) -> Option<web_sys::HtmlInputElement> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    document.get_element_by_id(input_id)?.dyn_into::<web_sys::HtmlInputElement>().ok()
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{value:?}"))
}
