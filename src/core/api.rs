//! REST client for the vault backend.
//!
//! [`VaultClient`] knows the endpoints and payloads; the actual HTTP exchange
//! goes through a [`Transport`], so the same client drives the browser Fetch
//! API and in-memory test doubles.

use serde::Serialize;
use serde_json::Value;

use crate::config::UPLOAD_FIELD;
use crate::core::error::FetchError;
use crate::core::session::Session;
use crate::models::{
    FilePayload, FileRecord, ShareRequest, SharedFileRecord, UploadReceipt, decode_list,
};

// =============================================================================
// Request / Response
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(String),
    Multipart {
        field: &'static str,
        file: FilePayload,
    },
}

/// A backend request, independent of how it is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Full `Authorization` header value.
    pub authorization: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Path component relative to the API base, for logging.
    pub fn path(&self) -> &str {
        self.url
            .find("://")
            .and_then(|scheme| self.url[scheme + 3..].find('/').map(|i| scheme + 3 + i))
            .map(|start| &self.url[start..])
            .unwrap_or(&self.url)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turn a non-2xx response into an error carrying the backend message.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::from_response(self.status, &self.text()))
        }
    }
}

/// Sends [`ApiRequest`]s and returns whatever the server answered.
///
/// Implementations only fail when no response was obtained; HTTP error
/// statuses come back as a normal [`ApiResponse`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError>;
}

// =============================================================================
// Client
// =============================================================================

/// Typed access to the vault endpoints.
#[derive(Clone, Debug)]
pub struct VaultClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> VaultClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> ApiRequest {
        ApiRequest {
            method,
            url: self.url(path),
            authorization: session.map(Session::bearer),
            body: RequestBody::Empty,
        }
    }

    fn json_request<B: Serialize>(
        &self,
        path: &str,
        session: Option<&Session>,
        body: &B,
    ) -> Result<ApiRequest, FetchError> {
        let json = serde_json::to_string(body).map_err(|_| FetchError::RequestCreationFailed)?;
        Ok(ApiRequest {
            body: RequestBody::Json(json),
            ..self.request(Method::Post, path, session)
        })
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        self.transport.send(request).await?.error_for_status()
    }

    /// `POST /login`. Returns the issued token, if the response carried one.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<String>, FetchError> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            password: &'a str,
        }

        let request = self.json_request("/login", None, &Body { email, password })?;
        let response = self.send(request).await?;

        Ok(serde_json::from_slice::<Value>(&response.body)
            .ok()
            .and_then(|v| v.get("token").and_then(Value::as_str).map(str::to_string))
            .filter(|t| !t.is_empty()))
    }

    /// `POST /register`. Returns the backend's confirmation text.
    pub async fn register(
        &self,
        username: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<String, FetchError> {
        #[derive(Serialize)]
        struct Body<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            username: Option<&'a str>,
            email: &'a str,
            password: &'a str,
        }

        let body = Body {
            username,
            email,
            password,
        };
        let request = self.json_request("/register", None, &body)?;
        Ok(self.send(request).await?.text())
    }

    /// `GET /files`
    pub async fn list_files(&self, session: &Session) -> Result<Vec<FileRecord>, FetchError> {
        let response = self
            .send(self.request(Method::Get, "/files", Some(session)))
            .await?;
        decode_list(&response.body)
    }

    /// `GET /shared`
    pub async fn list_shared(
        &self,
        session: &Session,
    ) -> Result<Vec<SharedFileRecord>, FetchError> {
        let response = self
            .send(self.request(Method::Get, "/shared", Some(session)))
            .await?;
        decode_list(&response.body)
    }

    /// `POST /files` as multipart form data.
    pub async fn upload(
        &self,
        session: &Session,
        file: FilePayload,
    ) -> Result<UploadReceipt, FetchError> {
        let request = ApiRequest {
            body: RequestBody::Multipart {
                field: UPLOAD_FIELD,
                file,
            },
            ..self.request(Method::Post, "/files", Some(session))
        };
        let response = self.send(request).await?;
        Ok(serde_json::from_slice(&response.body).unwrap_or_default())
    }

    /// `GET /files/{id}`, returning the raw content.
    pub async fn download(&self, session: &Session, id: i64) -> Result<Vec<u8>, FetchError> {
        let path = format!("/files/{}", id);
        let response = self
            .send(self.request(Method::Get, &path, Some(session)))
            .await?;
        Ok(response.body)
    }

    /// `DELETE /files/{id}`
    pub async fn delete(&self, session: &Session, id: i64) -> Result<(), FetchError> {
        let path = format!("/files/{}", id);
        self.send(self.request(Method::Delete, &path, Some(session)))
            .await?;
        Ok(())
    }

    /// `POST /share`
    pub async fn share(&self, session: &Session, share: &ShareRequest) -> Result<(), FetchError> {
        let request = self.json_request("/share", Some(session), share)?;
        self.send(request).await?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use crate::models::FileContent;

    fn client() -> VaultClient<MockTransport> {
        VaultClient::new("http://vault.test/", MockTransport::default())
    }

    #[tokio::test]
    async fn test_login_returns_token() {
        let client = client();
        client.transport().respond(200, r#"{"token":"abc.def.ghi"}"#);

        let token = client.login("a@b.c", "pw").await.unwrap();
        assert_eq!(token.as_deref(), Some("abc.def.ghi"));

        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].url, "http://vault.test/login");
        assert_eq!(requests[0].authorization, None);
        assert_eq!(
            requests[0].body,
            RequestBody::Json(r#"{"email":"a@b.c","password":"pw"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_login_without_token() {
        let client = client();
        client.transport().respond(200, "welcome");
        assert_eq!(client.login("a@b.c", "pw").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_register_body_includes_username() {
        let client = client();
        client.transport().respond(201, "User registered successfully");

        let text = client.register(Some("ann"), "a@b.c", "pw").await.unwrap();
        assert_eq!(text, "User registered successfully");
        assert_eq!(
            client.transport().requests.borrow()[0].body,
            RequestBody::Json(r#"{"username":"ann","email":"a@b.c","password":"pw"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn test_authenticated_requests_carry_bearer() {
        let client = client();
        let session = Session::new("tok");
        client.transport().respond(200, "null");
        client.transport().respond(204, "");

        assert!(client.list_files(&session).await.unwrap().is_empty());
        client.delete(&session, 5).await.unwrap();

        assert_eq!(client.transport().calls(), ["GET /files", "DELETE /files/5"]);
        for request in client.transport().requests.borrow().iter() {
            assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
        }
    }

    #[tokio::test]
    async fn test_upload_is_multipart() {
        let client = client();
        client
            .transport()
            .respond(200, r#"{"message":"File uploaded","file_id":11}"#);

        let file = FilePayload {
            name: "notes.txt".to_string(),
            content_type: Some("text/plain".to_string()),
            content: FileContent::Bytes(b"hello".to_vec()),
        };
        let receipt = client
            .upload(&Session::new("tok"), file.clone())
            .await
            .unwrap();

        assert_eq!(receipt.file_id, Some(11));
        assert_eq!(
            client.transport().requests.borrow()[0].body,
            RequestBody::Multipart {
                field: "file",
                file
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_maps_to_http_error() {
        let client = client();
        client.transport().respond(403, "You don't own this file");

        let err = client
            .share(
                &Session::new("tok"),
                &ShareRequest {
                    file_id: 1,
                    target_user: 2,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.to_string(), "You don't own this file");
    }

    #[tokio::test]
    async fn test_download_returns_bytes() {
        let client = client();
        client.transport().respond(200, "\u{1}binary");
        let bytes = client.download(&Session::new("tok"), 3).await.unwrap();
        assert_eq!(bytes, b"\x01binary");
        assert_eq!(client.transport().calls(), ["GET /files/3"]);
    }

    #[test]
    fn test_request_path() {
        let request = ApiRequest {
            method: Method::Get,
            url: "http://localhost:8080/files/2".to_string(),
            authorization: None,
            body: RequestBody::Empty,
        };
        assert_eq!(request.path(), "/files/2");
    }
}
