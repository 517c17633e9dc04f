//! Dashboard actions.
//!
//! Every mutation follows the same contract: perform the request, invalidate
//! the list it affects, refetch that list. Nothing is updated optimistically
//! and nothing is retried; a failed request leaves the displayed lists as
//! they were.
//!
//! The controller is generic over three seams:
//! - [`Transport`] for HTTP
//! - [`Host`] for the blocking browser dialogs and file saving
//! - [`VaultView`] for publishing refreshed lists

use leptos::logging::{error, log, warn};

use crate::config::messages;
use crate::core::api::{Transport, VaultClient};
use crate::core::error::{FetchError, SaveError};
use crate::core::session::Session;
use crate::models::{FilePayload, FileRecord, ShareRequest, SharedFileRecord};

/// Interactive browser facilities used by the dashboard.
pub trait Host {
    /// Blocking yes/no question.
    fn confirm(&self, message: &str) -> bool;
    /// Blocking text question. `None` when dismissed.
    fn prompt(&self, message: &str) -> Option<String>;
    fn alert(&self, message: &str);
    /// Hand downloaded content to the user under the given file name.
    fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<(), SaveError>;
}

/// Receiver of refreshed lists.
pub trait VaultView {
    fn show_files(&self, files: Vec<FileRecord>);
    fn show_shared(&self, shared: Vec<SharedFileRecord>);
}

/// A list shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    Files,
    Shared,
}

/// Dashboard controller bound to one session.
pub struct Dashboard<T, H, V> {
    client: VaultClient<T>,
    session: Session,
    host: H,
    view: V,
}

impl<T, H, V> Dashboard<T, H, V>
where
    T: Transport,
    H: Host,
    V: VaultView,
{
    pub fn new(client: VaultClient<T>, session: Session, host: H, view: V) -> Self {
        Self {
            client,
            session,
            host,
            view,
        }
    }

    /// Refetch one list and publish it. Failures keep the stale list.
    pub async fn refresh(&self, listing: Listing) {
        match listing {
            Listing::Files => match self.client.list_files(&self.session).await {
                Ok(files) => self.view.show_files(files),
                Err(e) => self.report_load_failure("files", &e),
            },
            Listing::Shared => match self.client.list_shared(&self.session).await {
                Ok(shared) => self.view.show_shared(shared),
                Err(e) => self.report_load_failure("shared files", &e),
            },
        }
    }

    fn report_load_failure(&self, what: &str, e: &FetchError) {
        if e.status() == Some(401) {
            warn!("backend rejected the session token");
        }
        error!("loading {} failed: {}", what, e);
    }

    /// Upload the selected file. No selection issues no request.
    ///
    /// Returns `true` when the backend accepted the file, so the caller can
    /// clear its selection.
    pub async fn upload(&self, file: Option<FilePayload>) -> bool {
        let Some(file) = file else {
            return false;
        };

        match self.client.upload(&self.session, file).await {
            Ok(receipt) => {
                log!(
                    "upload accepted (file {:?}): {}",
                    receipt.file_id,
                    receipt.message.as_deref().unwrap_or("ok")
                );
                self.host.alert(messages::UPLOADED);
                self.refresh(Listing::Files).await;
                true
            }
            Err(e) => {
                error!("upload failed: {}", e);
                self.host.alert(messages::UPLOAD_FAILED);
                false
            }
        }
    }

    /// Fetch a file's content and hand it to the host for saving.
    ///
    /// Failing to fetch and failing to save both alert the same way.
    pub async fn download(&self, id: i64, filename: &str) {
        let saved = match self.client.download(&self.session, id).await {
            Ok(bytes) => self
                .host
                .save_file(filename, &bytes)
                .map_err(|e| format!("saving {} failed: {}", filename, e)),
            Err(e) => Err(format!("download of {} failed: {}", id, e)),
        };

        if let Err(reason) = saved {
            error!("{}", reason);
            self.host.alert(messages::DOWNLOAD_FAILED);
        }
    }

    /// Delete after confirmation. A declined confirmation issues no request.
    pub async fn delete(&self, id: i64) {
        if !self.host.confirm(messages::CONFIRM_DELETE) {
            return;
        }

        match self.client.delete(&self.session, id).await {
            Ok(()) => {
                self.host.alert(messages::DELETED);
                self.refresh(Listing::Files).await;
            }
            Err(e) => {
                error!("delete of {} failed: {}", id, e);
                self.host.alert(messages::DELETE_FAILED);
            }
        }
    }

    /// Ask for a target user and share the file with them.
    pub async fn share(&self, file_id: i64) {
        let Some(answer) = self.host.prompt(messages::SHARE_PROMPT) else {
            return;
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return;
        }
        let Ok(target_user) = answer.parse::<i64>() else {
            self.host.alert(messages::INVALID_TARGET);
            return;
        };

        let request = ShareRequest {
            file_id,
            target_user,
        };
        match self.client.share(&self.session, &request).await {
            Ok(()) => {
                self.host.alert(messages::SHARED);
                self.refresh(Listing::Shared).await;
            }
            Err(e) => {
                error!("share of {} failed: {}", file_id, e);
                self.host.alert(messages::SHARE_FAILED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::core::api::RequestBody;
    use crate::core::api::mock::MockTransport;
    use crate::models::FileContent;

    #[derive(Default)]
    struct ScriptedHost {
        confirms: RefCell<VecDeque<bool>>,
        prompts: RefCell<VecDeque<Option<String>>>,
        alerts: RefCell<Vec<String>>,
        saved: RefCell<Vec<(String, Vec<u8>)>>,
        refuse_saves: bool,
    }

    impl Host for ScriptedHost {
        fn confirm(&self, _message: &str) -> bool {
            self.confirms.borrow_mut().pop_front().unwrap_or(false)
        }

        fn prompt(&self, _message: &str) -> Option<String> {
            self.prompts.borrow_mut().pop_front().flatten()
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<(), SaveError> {
            if self.refuse_saves {
                return Err(SaveError::Rejected("blob: URLs disabled".to_string()));
            }
            self.saved
                .borrow_mut()
                .push((filename.to_string(), bytes.to_vec()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingView {
        files: RefCell<Option<Vec<FileRecord>>>,
        shared: RefCell<Option<Vec<SharedFileRecord>>>,
    }

    impl VaultView for RecordingView {
        fn show_files(&self, files: Vec<FileRecord>) {
            *self.files.borrow_mut() = Some(files);
        }

        fn show_shared(&self, shared: Vec<SharedFileRecord>) {
            *self.shared.borrow_mut() = Some(shared);
        }
    }

    type TestDashboard = Dashboard<MockTransport, ScriptedHost, RecordingView>;

    fn dashboard() -> TestDashboard {
        Dashboard::new(
            VaultClient::new("http://vault.test", MockTransport::default()),
            Session::new("tok"),
            ScriptedHost::default(),
            RecordingView::default(),
        )
    }

    fn transport(d: &TestDashboard) -> &MockTransport {
        d.client.transport()
    }

    fn payload() -> FilePayload {
        FilePayload {
            name: "report.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            content: FileContent::Bytes(vec![1, 2, 3]),
        }
    }

    #[tokio::test]
    async fn test_initial_refresh_loads_both_lists() {
        let d = dashboard();
        transport(&d).respond(
            200,
            r#"[{"id":1,"filename":"a.txt","uploaded_at":"2025-01-01T00:00:00Z"}]"#,
        );
        transport(&d).respond(
            200,
            r#"[{"id":2,"filename":"b.txt","uploaded_at":"2025-01-01T00:00:00Z","shared_by":9}]"#,
        );

        d.refresh(Listing::Files).await;
        d.refresh(Listing::Shared).await;

        assert_eq!(d.view.files.borrow().as_ref().unwrap()[0].id, 1);
        assert_eq!(d.view.shared.borrow().as_ref().unwrap()[0].shared_by, Some(9));
        assert_eq!(transport(&d).calls(), ["GET /files", "GET /shared"]);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_list() {
        let d = dashboard();
        transport(&d).fail(FetchError::NetworkError("offline".to_string()));
        d.refresh(Listing::Files).await;
        assert!(d.view.files.borrow().is_none());
        assert!(d.host.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_upload_without_file_is_noop() {
        let d = dashboard();
        assert!(!d.upload(None).await);
        assert!(transport(&d).requests.borrow().is_empty());
        assert!(d.host.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_upload_then_refetch_files() {
        let d = dashboard();
        transport(&d).respond(200, r#"{"message":"ok","file_id":4}"#);

        assert!(d.upload(Some(payload())).await);

        assert_eq!(transport(&d).calls(), ["POST /files", "GET /files"]);
        assert!(matches!(
            transport(&d).requests.borrow()[0].body,
            RequestBody::Multipart { field: "file", .. }
        ));
        assert_eq!(*d.host.alerts.borrow(), [messages::UPLOADED]);
        assert_eq!(d.view.files.borrow().as_deref(), Some(&[][..]));
    }

    #[tokio::test]
    async fn test_upload_failure_alerts_without_refetch() {
        let d = dashboard();
        transport(&d).respond(400, "Could not parse form");

        assert!(!d.upload(Some(payload())).await);

        assert_eq!(transport(&d).calls(), ["POST /files"]);
        assert_eq!(*d.host.alerts.borrow(), [messages::UPLOAD_FAILED]);
    }

    #[tokio::test]
    async fn test_download_hands_bytes_to_host() {
        let d = dashboard();
        transport(&d).respond(200, "content");

        d.download(7, "notes.txt").await;

        assert_eq!(
            *d.host.saved.borrow(),
            [("notes.txt".to_string(), b"content".to_vec())]
        );
        assert_eq!(transport(&d).calls(), ["GET /files/7"]);
    }

    #[tokio::test]
    async fn test_download_failure_alerts() {
        let d = dashboard();
        transport(&d).respond(403, "Forbidden");

        d.download(7, "notes.txt").await;

        assert!(d.host.saved.borrow().is_empty());
        assert_eq!(*d.host.alerts.borrow(), [messages::DOWNLOAD_FAILED]);
    }

    #[tokio::test]
    async fn test_refused_save_alerts_download_failed() {
        let mut d = dashboard();
        d.host.refuse_saves = true;
        transport(&d).respond(200, "content");

        d.download(7, "notes.txt").await;

        assert_eq!(transport(&d).calls(), ["GET /files/7"]);
        assert!(d.host.saved.borrow().is_empty());
        assert_eq!(*d.host.alerts.borrow(), [messages::DOWNLOAD_FAILED]);
    }

    #[tokio::test]
    async fn test_delete_cancelled_issues_no_request() {
        let d = dashboard();
        d.host.confirms.borrow_mut().push_back(false);

        d.delete(3).await;

        assert!(transport(&d).requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmed_then_refetch() {
        let d = dashboard();
        d.host.confirms.borrow_mut().push_back(true);
        transport(&d).respond(200, "");

        d.delete(3).await;

        assert_eq!(transport(&d).calls(), ["DELETE /files/3", "GET /files"]);
        assert_eq!(*d.host.alerts.borrow(), [messages::DELETED]);
    }

    #[tokio::test]
    async fn test_share_refetches_shared_exactly_once() {
        let d = dashboard();
        d.host.prompts.borrow_mut().push_back(Some("12".to_string()));
        transport(&d).respond(200, "");

        d.share(5).await;

        assert_eq!(transport(&d).calls(), ["POST /share", "GET /shared"]);
        assert_eq!(
            transport(&d).requests.borrow()[0].body,
            RequestBody::Json(r#"{"file_id":5,"target_user":12}"#.to_string())
        );
        assert_eq!(*d.host.alerts.borrow(), [messages::SHARED]);
    }

    #[tokio::test]
    async fn test_share_dismissed_or_invalid_issues_no_request() {
        let d = dashboard();
        d.host.prompts.borrow_mut().push_back(None);
        d.host.prompts.borrow_mut().push_back(Some("   ".to_string()));
        d.host.prompts.borrow_mut().push_back(Some("bob".to_string()));

        d.share(5).await;
        d.share(5).await;
        d.share(5).await;

        assert!(transport(&d).requests.borrow().is_empty());
        assert_eq!(*d.host.alerts.borrow(), [messages::INVALID_TARGET]);
    }

    #[tokio::test]
    async fn test_share_failure_skips_refetch() {
        let d = dashboard();
        d.host.prompts.borrow_mut().push_back(Some("12".to_string()));
        transport(&d).respond(403, "You don't own this file");

        d.share(5).await;

        assert_eq!(transport(&d).calls(), ["POST /share"]);
        assert_eq!(*d.host.alerts.borrow(), [messages::SHARE_FAILED]);
    }
}
