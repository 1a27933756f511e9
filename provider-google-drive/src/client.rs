//! Authenticated Google Drive API v3 client
//!
//! Thin wrapper over the two file endpoints the importer needs: children
//! listings with continuation-token paging, and single-node metadata reads.
//! Every request carries a bearer token from [`TokenManager`], which
//! re-acquires expired tokens transparently.

use crate::error::{DriveError, Result};
use crate::types::{DriveFile, FileList};
use async_trait::async_trait;
use core_auth::TokenManager;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Google Drive API base URL
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Maximum results per page (Google Drive API limit)
const MAX_PAGE_SIZE: u32 = 1000;

/// Field mask for children listings
const LIST_FIELDS: &str =
    "nextPageToken, files(id, name, mimeType, size, createdTime, modifiedTime)";

/// Listing order: folders before files, by name, most recent change first
const LIST_ORDER: &str = "folder,name,modifiedTime desc";

/// Read access to a folder hierarchy.
///
/// [`DriveClient`] implements this against the live API; traversal and
/// orchestration depend only on the trait so tests can substitute in-memory
/// trees.
#[async_trait]
pub trait FolderSource: Send + Sync {
    /// Every direct child of a folder, across all result pages.
    async fn list_children(&self, folder_id: &str) -> Result<Vec<DriveFile>>;

    /// Metadata (id and name) for a single node.
    async fn get_metadata(&self, file_id: &str) -> Result<DriveFile>;
}

/// Google Drive API v3 client
pub struct DriveClient {
    http: reqwest::Client,
    auth: Arc<TokenManager>,
}

impl DriveClient {
    pub fn new(http: reqwest::Client, auth: Arc<TokenManager>) -> Self {
        Self { http, auth }
    }
}

#[async_trait]
impl FolderSource for DriveClient {
    #[instrument(skip(self))]
    async fn list_children(&self, folder_id: &str) -> Result<Vec<DriveFile>> {
        let http = self.http.clone();
        let auth = Arc::clone(&self.auth);
        let folder_id_owned = folder_id.to_string();

        let files = follow_pages(move |page_token| {
            fetch_page(
                http.clone(),
                Arc::clone(&auth),
                folder_id_owned.clone(),
                page_token,
            )
        })
        .await?;

        debug!("Listed {} children of folder {}", files.len(), folder_id);
        Ok(files)
    }

    #[instrument(skip(self))]
    async fn get_metadata(&self, file_id: &str) -> Result<DriveFile> {
        let access_token = self.auth.access_token().await?;

        let response = self
            .http
            .get(format!("{}/files/{}", DRIVE_API_BASE, file_id))
            .bearer_auth(&access_token)
            .query(&[("fields", "id, name")])
            .send()
            .await?;

        read_json(response, "file metadata").await
    }
}

/// Fetches one page of a folder's children.
async fn fetch_page(
    http: reqwest::Client,
    auth: Arc<TokenManager>,
    folder_id: String,
    page_token: Option<String>,
) -> Result<FileList> {
    let access_token = auth.access_token().await?;
    let query = format!("'{}' in parents and trashed = false", folder_id);
    let page_size = MAX_PAGE_SIZE.to_string();

    let mut params = vec![
        ("q", query.as_str()),
        ("fields", LIST_FIELDS),
        ("orderBy", LIST_ORDER),
        ("pageSize", page_size.as_str()),
    ];
    if let Some(ref token) = page_token {
        params.push(("pageToken", token.as_str()));
    }

    let response = http
        .get(format!("{}/files", DRIVE_API_BASE))
        .bearer_auth(&access_token)
        .query(&params)
        .send()
        .await?;

    read_json(response, "files list").await
}

/// Drains a paginated listing by following every continuation token.
///
/// `fetch` is called with `None` first, then with each token the previous
/// page returned, until a page comes back without one. An empty token
/// counts as absent.
async fn follow_pages<F, Fut>(mut fetch: F) -> Result<Vec<DriveFile>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<FileList>>,
{
    let mut files = Vec::new();
    let mut page_token = None;

    loop {
        let page = fetch(page_token).await?;
        files.extend(page.files);

        match page.next_page_token {
            Some(token) if !token.is_empty() => page_token = Some(token),
            _ => break,
        }
    }

    Ok(files)
}

/// Checks the response status and decodes the JSON body.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response body".to_string());
        warn!("Drive API request failed with status {}: {}", status, message);
        return Err(DriveError::Api {
            status_code: status.as_u16(),
            message,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| DriveError::Parse(format!("Failed to parse {} response: {}", what, e)))
}
