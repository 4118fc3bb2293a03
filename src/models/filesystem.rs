use serde::Deserialize;

// =============================================================================
// Filesystem Nodes
// =============================================================================

/// One entry in the virtual filesystem tree.
///
/// The tree is built once and never mutated afterwards; every operation on
/// it is read-only traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Inner node holding an insertion-ordered, name-unique child list.
    Directory { children: Vec<(String, Node)> },
    /// Leaf holding opaque textual content.
    File { content: String },
    /// Leaf denoting an external link target.
    ///
    /// Not navigable as a directory and not readable as file content.
    Redirect { url: String },
}

impl Node {
    /// Create a directory node from `(name, node)` pairs.
    ///
    /// Order of the pairs is the order `ls` reports them in.
    pub fn dir(children: Vec<(String, Node)>) -> Self {
        Node::Directory { children }
    }

    /// Create a file node.
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    /// Create a redirect node pointing at an external URL.
    pub fn redirect(url: impl Into<String>) -> Self {
        Node::Redirect { url: url.into() }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Look up a child by name.
    ///
    /// Returns `None` for leaves as well as for missing names, so a path
    /// walk fails uniformly whether a segment is absent or an intermediate
    /// node is not a directory.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory { children } => children
                .iter()
                .find(|(child_name, _)| child_name == name)
                .map(|(_, node)| node),
            Node::File { .. } | Node::Redirect { .. } => None,
        }
    }

    /// The child list of a directory, in stored order.
    pub fn children(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } | Node::Redirect { .. } => None,
        }
    }
}

// =============================================================================
// Layout Types
// =============================================================================

/// Declarative description of a filesystem tree.
///
/// The built-in layout is embedded as a JSON asset and parsed once at
/// construction; see [`crate::config::LAYOUT_JSON`]. Entries are arrays
/// rather than JSON objects so their order survives deserialization.
#[derive(Clone, Debug, Deserialize)]
pub struct Layout {
    /// Children of the root directory.
    pub entries: Vec<LayoutEntry>,
}

/// A named entry in a [`Layout`].
#[derive(Clone, Debug, Deserialize)]
pub struct LayoutEntry {
    /// Entry name within its parent directory.
    pub name: String,
    #[serde(flatten)]
    pub node: LayoutNode,
}

/// The node variant of a [`LayoutEntry`], tagged by `"type"`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Directory { entries: Vec<LayoutEntry> },
    File { content: String },
    Redirect { url: String },
}
