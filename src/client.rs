use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    error::Result,
    types::{DirectoryEntry, UploadReceipt},
};

/// Core abstraction over the remote storage service
///
/// Implementors are stateless request/response values; the folder tree
/// borrows one per operation and never holds it. [`FolderTree`] is
/// generic over this trait so tests can drive the state machine without
/// a network.
///
/// [`FolderTree`]: crate::FolderTree
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// List one folder, non-recursively
    ///
    /// `path` is the canonical lowercase path of the folder; the empty
    /// string means the account root. Entries come back in service
    /// order, unsorted.
    async fn list_folder(&self, path: &str) -> Result<Vec<DirectoryEntry>>;

    /// Store `content` as a new file named `file_name` under `folder_path`
    ///
    /// Name collisions auto-rename on the remote side rather than
    /// overwriting or failing; the receipt carries the name actually
    /// stored.
    async fn upload(
        &self,
        content: Bytes,
        folder_path: &str,
        file_name: &str,
    ) -> Result<UploadReceipt>;

    /// Get a human-readable identifier for this client (for logging/debugging)
    fn identifier(&self) -> String;
}
