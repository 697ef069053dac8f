//! Radix tree nodes.
//!
//! Nodes live in an arena owned by [`PrefixTree`](crate::tree::PrefixTree)
//! and refer to each other by [`NodeId`]. Children are owned through the
//! arena; the `parent` link is a plain index used only to compute depth and
//! rebuild full keys.

use std::fmt;

/// Index of a node inside a tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root sentinel always occupies the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single edge-label segment of the radix tree.
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub(crate) key: String,
    pub(crate) data: Vec<V>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) is_leaf: bool,
    pub(crate) is_root: bool,
}

impl<V> Node<V> {
    pub(crate) fn root() -> Self {
        Node {
            key: String::new(),
            data: Vec::new(),
            children: Vec::new(),
            parent: None,
            is_leaf: false,
            is_root: true,
        }
    }

    pub(crate) fn with_key(key: String, parent: NodeId) -> Self {
        Node {
            key,
            data: Vec::new(),
            children: Vec::new(),
            parent: Some(parent),
            is_leaf: false,
            is_root: false,
        }
    }

    /// The key fragment stored on this node (empty for the root).
    pub fn key_fragment(&self) -> &str {
        &self.key
    }

    /// Payload values stored for the exact key ending at this node.
    pub fn values(&self) -> &[V] {
        &self.data
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The node one level up, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this node terminates an inserted key.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Whether this node is the root sentinel.
    pub fn is_root(&self) -> bool {
        self.is_root
    }
}
