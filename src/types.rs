use serde::{Deserialize, Serialize};

/// One file or folder record returned by a remote listing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Display name of the file or folder
    pub name: String,
    /// Canonical lowercase path, the stable identifier for further requests
    pub path_lower: String,
    /// Variant discriminator, serialized as `.tag` by the remote service
    #[serde(rename = ".tag")]
    pub tag: EntryTag,
}

/// Type of directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryTag {
    File,
    Folder,
}

impl DirectoryEntry {
    pub fn is_folder(&self) -> bool {
        self.tag == EntryTag::Folder
    }
}

/// Response envelope of the listing endpoint
///
/// The service also returns pagination fields (`cursor`, `has_more`);
/// this crate lists non-recursively and ignores them.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderListing {
    pub entries: Vec<DirectoryEntry>,
}

/// Metadata of a stored object as reported by the upload endpoint
///
/// With auto-rename in effect the stored `name` and `path_lower` can
/// differ from what the caller requested.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    pub name: String,
    pub path_lower: String,
}
