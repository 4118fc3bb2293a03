use log::warn;

use crate::config;
use crate::core::error::LayoutError;
use crate::models::{Layout, LayoutEntry, LayoutNode, Node};

/// Immutable virtual filesystem rooted at `/`.
///
/// Built once (normally from the embedded layout) and shared read-only by
/// every shell session. Exposes traversal only; there are no mutation
/// operations in the public contract.
///
/// # Path Convention
///
/// - All filesystem paths are absolute and normalized: they start with
///   `/`, contain no `.`/`..` segments, and carry no trailing slash
///   (except the root itself, which is exactly `/`).
/// - Path arithmetic ([`normalize`](Self::normalize),
///   [`resolve`](Self::resolve), [`parent_path`](Self::parent_path)) is
///   pure string work and never touches the tree.
#[derive(Clone, Debug)]
pub struct FileSystem {
    /// Root directory containing the whole tree.
    root: Node,
}

impl FileSystem {
    /// Build a filesystem from a declarative layout.
    ///
    /// Fails if any directory in the layout contains two entries with the
    /// same name.
    pub fn from_layout(layout: &Layout) -> Result<Self, LayoutError> {
        let children = Self::build_children("/", &layout.entries)?;
        Ok(Self {
            root: Node::dir(children),
        })
    }

    fn build_children(
        parent: &str,
        entries: &[LayoutEntry],
    ) -> Result<Vec<(String, Node)>, LayoutError> {
        let mut children: Vec<(String, Node)> = Vec::with_capacity(entries.len());
        for entry in entries {
            if children.iter().any(|(name, _)| name == &entry.name) {
                return Err(LayoutError::DuplicateName {
                    parent: parent.to_string(),
                    name: entry.name.clone(),
                });
            }
            let node = match &entry.node {
                LayoutNode::Directory { entries } => {
                    let path = if parent == "/" {
                        format!("/{}", entry.name)
                    } else {
                        format!("{}/{}", parent, entry.name)
                    };
                    Node::dir(Self::build_children(&path, entries)?)
                }
                LayoutNode::File { content } => Node::file(content.clone()),
                LayoutNode::Redirect { url } => Node::redirect(url.clone()),
            };
            children.push((entry.name.clone(), node));
        }
        Ok(children)
    }

    /// Create an empty filesystem (bare root directory).
    pub fn empty() -> Self {
        Self {
            root: Node::dir(Vec::new()),
        }
    }

    /// Build the filesystem from the embedded layout asset.
    ///
    /// Falls back to [`empty`](Self::empty) if the asset is unusable, so
    /// session construction never fails.
    pub fn builtin() -> Self {
        let built = serde_json::from_str::<Layout>(config::LAYOUT_JSON)
            .map_err(LayoutError::from)
            .and_then(|layout| Self::from_layout(&layout));
        match built {
            Ok(fs) => fs,
            Err(err) => {
                warn!("built-in layout unusable, starting empty: {err}");
                Self::empty()
            }
        }
    }

    /// The root directory node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Locate the node at a normalized absolute path.
    ///
    /// Walks segment by segment from the root; `/` yields the root
    /// directly. Returns `None` when a segment is missing or an
    /// intermediate node is not a directory.
    pub fn locate(&self, path: &str) -> Option<&Node> {
        let mut current = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Check whether a node can be entered with `cd`.
    ///
    /// Only directories qualify: a file has no children, and a redirect
    /// denotes an external target rather than a local subtree.
    pub fn is_navigable(node: &Node) -> bool {
        node.is_directory()
    }

    /// Normalize a path by collapsing `.`, `..`, and duplicate separators.
    ///
    /// Ascending past the root is absorbed (the root has no parent, so
    /// `..` there is a no-op, not an error). The result is always a
    /// normalized absolute path. Pure string work.
    pub fn normalize(path: &str) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/').filter(|s| !s.is_empty()) {
            match part {
                "." => {}
                ".." => {
                    parts.pop();
                }
                _ => parts.push(part),
            }
        }

        if parts.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", parts.join("/"))
        }
    }

    /// Resolve a target path against a working directory.
    ///
    /// Absolute targets are normalized as-is; relative targets are joined
    /// to `cwd` first. An empty target resolves to [`config::HOME_PATH`],
    /// not to `cwd`.
    pub fn resolve(cwd: &str, target: &str) -> String {
        if target.is_empty() {
            return Self::normalize(config::HOME_PATH);
        }
        if target.starts_with('/') {
            Self::normalize(target)
        } else {
            Self::normalize(&format!("{}/{}", cwd, target))
        }
    }

    /// The parent of a normalized absolute path.
    ///
    /// The root is its own parent.
    pub fn parent_path(path: &str) -> String {
        let mut parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        parts.pop();

        if parts.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", parts.join("/"))
        }
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::builtin()
    }
}
