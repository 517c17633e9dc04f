//! Network fetching utilities.
//!
//! Provides the browser [`Transport`] for the vault client, built on the
//! Fetch API.
//!
//! Requests are never cut short: an upload finishes only once the backend has
//! read the whole multipart body, however long that takes.

use js_sys::Uint8Array;
use leptos::logging::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::core::api::{ApiRequest, ApiResponse, RequestBody, Transport};
use crate::core::error::FetchError;
use crate::models::FileContent;
use crate::utils::dom;

/// [`Transport`] over the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl BrowserTransport {
    fn build(request: &ApiRequest) -> Result<Request, FetchError> {
        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
        if let Some(auth) = &request.authorization {
            headers
                .set("Authorization", auth)
                .map_err(|_| FetchError::RequestCreationFailed)?;
        }

        match &request.body {
            RequestBody::Empty => {}
            RequestBody::Json(json) => {
                headers
                    .set("Content-Type", "application/json")
                    .map_err(|_| FetchError::RequestCreationFailed)?;
                opts.set_body(&JsValue::from_str(json));
            }
            RequestBody::Multipart { field, file } => {
                // The browser sets the multipart boundary header itself.
                let form = FormData::new().map_err(|_| FetchError::RequestCreationFailed)?;
                let appended = match &file.content {
                    FileContent::Picked(picked) => {
                        form.append_with_blob_and_filename(field, picked, &file.name)
                    }
                    #[cfg(test)]
                    FileContent::Bytes(bytes) => {
                        dom::bytes_to_blob(bytes, file.content_type.as_deref()).and_then(|blob| {
                            form.append_with_blob_and_filename(field, &blob, &file.name)
                        })
                    }
                };
                appended.map_err(|_| FetchError::RequestCreationFailed)?;
                opts.set_body(&form);
            }
        }
        opts.set_headers(&headers);

        Request::new_with_str_and_init(&request.url, &opts)
            .map_err(|_| FetchError::RequestCreationFailed)
    }
}

impl Transport for BrowserTransport {
    /// A rejected fetch (CORS, refused connection, offline) is a
    /// `FetchError::NetworkError`; any HTTP status is a response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        let window = web_sys::window().ok_or(FetchError::NoWindow)?;
        let fetch_request = Self::build(&request)?;

        let result = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(|e| {
                let message = dom::js_error_message(&e);
                let method = request.method.as_str();
                warn!("{} {} got no response: {}", method, request.path(), message);
                FetchError::NetworkError(message)
            })?;

        let resp: Response = result
            .dyn_into()
            .map_err(|_| FetchError::ResponseReadFailed)?;

        let buffer = JsFuture::from(
            resp.array_buffer()
                .map_err(|_| FetchError::ResponseReadFailed)?,
        )
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

        Ok(ApiResponse {
            status: resp.status(),
            body: Uint8Array::new(&buffer).to_vec(),
        })
    }
}
