use bytes::Bytes;
use tracing::warn;

use crate::{
    client::StorageClient,
    error::{Result, StorageError},
    types::{DirectoryEntry, EntryTag, UploadReceipt},
};

/// Path of the account root
pub const ROOT_PATH: &str = "";

/// Outcome of a user toggle on a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Node is now visible; `fetched` is true when this expansion
    /// materialized its children for the first time
    Expanded { fetched: bool },
    /// Node is now hidden; children stay in memory
    Collapsed,
    /// File entries are links, not toggles
    Ignored,
}

/// One node of the visible tree: a directory entry plus expansion state
///
/// `children: None` means the node was never materialized; `Some` means
/// its listing was fetched (a folder with zero entries is `Some(vec![])`,
/// a distinct state from unmaterialized). File nodes never get children.
#[derive(Debug)]
pub struct TreeNode {
    entry: DirectoryEntry,
    expanded: bool,
    children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    fn new(entry: DirectoryEntry) -> Self {
        Self {
            entry,
            expanded: false,
            children: None,
        }
    }

    pub fn entry(&self) -> &DirectoryEntry {
        &self.entry
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_materialized(&self) -> bool {
        self.children.is_some()
    }

    /// Materialized children, `None` while unmaterialized
    pub fn children(&self) -> Option<&[TreeNode]> {
        self.children.as_deref()
    }

    fn find(&self, path: &str) -> Option<&TreeNode> {
        if self.entry.path_lower == path {
            return Some(self);
        }
        self.children
            .as_ref()?
            .iter()
            .find_map(|child| child.find(path))
    }

    fn find_mut(&mut self, path: &str) -> Option<&mut TreeNode> {
        if self.entry.path_lower == path {
            return Some(self);
        }
        self.children
            .as_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(path))
    }

    fn replace_children(&mut self, entries: Vec<DirectoryEntry>) {
        self.children = Some(entries.into_iter().map(TreeNode::new).collect());
    }
}

/// Lazily-populated folder tree over one remote storage account
///
/// Owns all node state; a [`StorageClient`] is borrowed per operation,
/// never held. Nodes are addressed by their `path_lower`, with
/// [`ROOT_PATH`] (the empty string) naming the account root.
///
/// Each fetch is awaited inside the `&mut self` operation that issued
/// it, so no toggle can interleave with an in-flight materialization.
#[derive(Debug)]
pub struct FolderTree {
    root: TreeNode,
}

impl FolderTree {
    /// An unloaded tree: root present, collapsed, unmaterialized
    pub fn new() -> Self {
        Self {
            root: TreeNode::new(DirectoryEntry {
                name: String::new(),
                path_lower: ROOT_PATH.to_string(),
                tag: EntryTag::Folder,
            }),
        }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Look up a node by its canonical path
    pub fn node(&self, path: &str) -> Option<&TreeNode> {
        self.root.find(path)
    }

    /// Initial page load: list the account root and show it
    pub async fn load_root(&mut self, client: &dyn StorageClient) -> Result<()> {
        self.refresh(ROOT_PATH, client).await?;
        self.root.expanded = true;
        Ok(())
    }

    /// One user toggle on the node at `path`
    ///
    /// First expansion of a folder fetches and materializes its children;
    /// every later toggle only flips visibility. A listing failure leaves
    /// the node exactly as it was, with no partial materialization.
    pub async fn toggle(&mut self, path: &str, client: &dyn StorageClient) -> Result<Toggle> {
        let node = self.require(path)?;
        if !node.entry.is_folder() {
            return Ok(Toggle::Ignored);
        }

        if !node.is_materialized() {
            let entries = client.list_folder(path).await?;
            let node = self.require_mut(path)?;
            node.replace_children(entries);
            node.expanded = true;
            return Ok(Toggle::Expanded { fetched: true });
        }

        let node = self.require_mut(path)?;
        node.expanded = !node.expanded;
        Ok(if node.expanded {
            Toggle::Expanded { fetched: false }
        } else {
            Toggle::Collapsed
        })
    }

    /// Re-list the folder at `path` and replace its children wholesale
    ///
    /// Runs regardless of prior materialization state; old children are
    /// dropped, never merged. Visibility is left alone.
    pub async fn refresh(&mut self, path: &str, client: &dyn StorageClient) -> Result<()> {
        let node = self.require(path)?;
        if !node.entry.is_folder() {
            return Err(StorageError::NotAFolder {
                path: path.to_string(),
            });
        }

        let entries = client.list_folder(path).await?;
        self.require_mut(path)?.replace_children(entries);
        Ok(())
    }

    /// Upload a file into the folder at `path`, then refresh that folder
    ///
    /// On upload failure no refresh happens and prior state is untouched;
    /// the error is returned for the caller to surface. Once the upload
    /// has succeeded the receipt is returned even if the follow-up
    /// listing fails, in which case the stale children are kept.
    pub async fn upload_into(
        &mut self,
        path: &str,
        file_name: &str,
        content: Bytes,
        client: &dyn StorageClient,
    ) -> Result<UploadReceipt> {
        let node = self.require(path)?;
        if !node.entry.is_folder() {
            return Err(StorageError::NotAFolder {
                path: path.to_string(),
            });
        }

        let receipt = client.upload(content, path, file_name).await?;

        if let Err(error) = self.refresh(path, client).await {
            warn!(path, %error, "post-upload refresh failed, keeping stale children");
        }
        Ok(receipt)
    }

    fn require(&self, path: &str) -> Result<&TreeNode> {
        self.root.find(path).ok_or_else(|| StorageError::UnknownPath {
            path: path.to_string(),
        })
    }

    fn require_mut(&mut self, path: &str) -> Result<&mut TreeNode> {
        self.root
            .find_mut(path)
            .ok_or_else(|| StorageError::UnknownPath {
                path: path.to_string(),
            })
    }
}

impl Default for FolderTree {
    fn default() -> Self {
        Self::new()
    }
}
