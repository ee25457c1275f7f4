pub mod client;
pub mod config;
pub mod dropbox;
pub mod error;
pub mod render;
pub mod tree;
pub mod types;

pub use client::StorageClient;
pub use config::StorageConfig;
pub use dropbox::DropboxClient;
pub use error::{Result, StorageError};
pub use render::{file_url, render, EMPTY_FOLDER_MARKER, WEB_HOME_URL};
pub use tree::{FolderTree, Toggle, TreeNode, ROOT_PATH};
pub use types::{DirectoryEntry, EntryTag, FolderListing, UploadReceipt};
