use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    client::StorageClient,
    config::StorageConfig,
    error::{Result, StorageError},
    types::{DirectoryEntry, FolderListing, UploadReceipt},
};

/// Dropbox-backed storage client
///
/// Talks to two fixed endpoints from [`StorageConfig`]:
/// - the listing endpoint, JSON request/response
/// - the upload endpoint, argument in a `Dropbox-API-Arg` header and the
///   raw file bytes as the request body
#[derive(Clone)]
pub struct DropboxClient {
    client: Client,
    config: StorageConfig,
}

#[derive(Serialize)]
struct ListFolderArg<'a> {
    path: &'a str,
    recursive: bool,
}

#[derive(Serialize)]
struct UploadArg<'a> {
    path: &'a str,
    mode: &'a str,
    autorename: bool,
    mute: bool,
}

impl DropboxClient {
    pub fn new(config: StorageConfig) -> Self {
        let client = Client::builder()
            .user_agent("cloudtree/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Build the destination file path for an upload
    ///
    /// The root folder is the empty string, so the result always starts
    /// with `/` the way the service expects.
    fn destination_path(folder_path: &str, file_name: &str) -> String {
        format!("{}/{}", folder_path.trim_end_matches('/'), file_name)
    }

    /// Map a non-success response to `RemoteService`, keeping the body text
    async fn remote_error(response: reqwest::Response) -> StorageError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        StorageError::RemoteService { status, message }
    }
}

#[async_trait]
impl StorageClient for DropboxClient {
    async fn list_folder(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        debug!(client = %self.identifier(), path, "listing folder");

        let response = self
            .client
            .post(&self.config.list_url)
            .bearer_auth(&self.config.access_token)
            .json(&ListFolderArg {
                path,
                recursive: false,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(path, status = %response.status(), "listing rejected");
            return Err(Self::remote_error(response).await);
        }

        let listing: FolderListing = response.json().await?;
        Ok(listing.entries)
    }

    async fn upload(
        &self,
        content: Bytes,
        folder_path: &str,
        file_name: &str,
    ) -> Result<UploadReceipt> {
        let destination = Self::destination_path(folder_path, file_name);
        debug!(client = %self.identifier(), %destination, bytes = content.len(), "uploading file");

        let arg = serde_json::to_string(&UploadArg {
            path: &destination,
            mode: "add",
            autorename: true,
            mute: false,
        })?;

        let response = self
            .client
            .post(&self.config.upload_url)
            .bearer_auth(&self.config.access_token)
            .header("Dropbox-API-Arg", arg)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(content)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(%destination, status = %response.status(), "upload rejected");
            return Err(Self::remote_error(response).await);
        }

        let receipt: UploadReceipt = response.json().await?;
        Ok(receipt)
    }

    fn identifier(&self) -> String {
        format!("dropbox://{}", self.config.list_url)
    }
}
