use std::fmt::Write;

use crate::{
    tree::{FolderTree, TreeNode},
    types::{DirectoryEntry, EntryTag},
};

/// Web UI base for file link-outs
pub const WEB_HOME_URL: &str = "https://www.dropbox.com/home";

/// Marker line shown inside an expanded folder with zero entries
pub const EMPTY_FOLDER_MARKER: &str = "(folder is empty)";

/// Link target for a file entry, opened by the front end in a new context
pub fn file_url(entry: &DirectoryEntry) -> String {
    format!("{}{}", WEB_HOME_URL, entry.path_lower)
}

/// Render the tree as nested indented text
///
/// Closed folders print as `+ name/`, open folders as `- name/` followed
/// by their children, files as `name -> <url>`. The open marker and the
/// children's visibility move in lock-step with the node's expansion
/// state; unmaterialized folders show nothing beneath their line.
pub fn render(tree: &FolderTree) -> String {
    let mut out = String::new();
    render_below(tree.root(), 0, &mut out);
    out
}

fn render_below(node: &TreeNode, depth: usize, out: &mut String) {
    if !node.is_expanded() {
        return;
    }
    match node.children() {
        Some([]) => line(out, depth, EMPTY_FOLDER_MARKER),
        Some(children) => {
            for child in children {
                render_node(child, depth, out);
            }
        }
        None => {}
    }
}

fn render_node(node: &TreeNode, depth: usize, out: &mut String) {
    let entry = node.entry();
    match entry.tag {
        EntryTag::File => {
            line(out, depth, &format!("{} -> {}", entry.name, file_url(entry)));
        }
        EntryTag::Folder => {
            let marker = if node.is_expanded() { '-' } else { '+' };
            line(out, depth, &format!("{} {}/", marker, entry.name));
            render_below(node, depth + 1, out);
        }
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), text);
}
