//! Compressed prefix tree (radix tree) keyed by strings.
//!
//! Every node stores a key fragment; concatenating the fragments along a
//! root-to-node path spells the node's full key. Siblings never share a
//! non-empty common prefix, so at most one child can match the next part of
//! a key and lookups never need to backtrack.
//!
//! Inserting a key that overlaps an existing fragment splits that fragment.
//! For example inserting `"string"` into a tree holding `"stringmap"`:
//!
//! ```text
//!   before:            after:
//!
//!     o (root)           o (root)
//!     |                  |
//!     o "stringmap"      o "string"   = values of "string"
//!                        |
//!                        o "map"      = values of "stringmap"
//! ```

use log::trace;

use crate::tree::lcp::common_prefix_len;
use crate::tree::node::{Node, NodeId};
use crate::util::paged_stack::{DEFAULT_PAGE_SIZE, PagedStack};

/// Where a key landed during a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Located {
    pub(crate) node: NodeId,
    /// `true` when the node's full key equals the looked-up key, `false` when
    /// the key ends inside the node's fragment (or addresses the root).
    pub(crate) exact: bool,
}

/// A radix tree mapping string keys to lists of values.
#[derive(Debug, Clone)]
pub struct PrefixTree<V> {
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) page_size: usize,
    key_count: usize,
}

impl<V> PrefixTree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty tree whose traversals use stacks with the given page size.
    pub fn with_page_size(page_size: usize) -> Self {
        PrefixTree {
            nodes: vec![Node::root()],
            page_size,
            key_count: 0,
        }
    }

    /// The root sentinel.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Access a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.0]
    }

    /// Number of distinct keys inserted so far.
    pub fn len(&self) -> usize {
        self.key_count
    }

    /// Whether no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append `values` to the list stored under `key`, creating the key if needed.
    ///
    /// The empty key addresses the root, which never carries values; inserting
    /// under it is a no-op.
    pub fn insert<I>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        if key.is_empty() {
            trace!("ignoring insert under the empty key");
            return;
        }

        let id = self.node_for_key_or_insert(key);
        self.mark_leaf(id);
        self.nodes[id.0].data.extend(values);
    }

    /// Replace the list stored under `key` with `values`.
    ///
    /// Behaves like [`insert`](Self::insert) when the key is absent.
    pub fn replace<I>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        if key.is_empty() {
            trace!("ignoring replace under the empty key");
            return;
        }

        let id = self.node_for_key_or_insert(key);
        self.mark_leaf(id);
        self.nodes[id.0].data = values.into_iter().collect();
    }

    /// Values stored under exactly `key`, or `None` if the key was never inserted.
    ///
    /// Internal nodes created by splits spell a key too, but are not present
    /// until that key is inserted itself.
    pub fn get(&self, key: &str) -> Option<&[V]> {
        match self.locate(key) {
            Some(Located { node, exact: true }) if self.nodes[node.0].is_leaf => {
                Some(self.nodes[node.0].data.as_slice())
            }
            _ => None,
        }
    }

    /// Whether `key` is present as an exact key.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Every value stored under a key starting with `prefix`.
    ///
    /// `prefix` may end in the middle of a node's fragment. Values come out in
    /// depth-first order; the result is empty when nothing matches.
    pub fn get_by_prefix(&self, prefix: &str) -> Vec<&V> {
        let Some(located) = self.locate(prefix) else {
            return Vec::new();
        };

        let mut values = Vec::new();
        let mut stack = PagedStack::with_page_size(self.page_size);
        stack.push(located.node);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            values.extend(node.data.iter());
            stack.push_all(node.children.iter().copied());
        }

        values
    }

    /// Whether some node's path spells (or passes through) `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        match self.locate(prefix) {
            Some(Located { node: NodeId::ROOT, .. }) => !self.nodes[0].children.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    /// Rebuild the full key of `id` by walking parent links up to the root.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn full_key(&self, id: NodeId) -> String {
        let mut fragments = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            if node.is_root {
                break;
            }
            fragments.push(node.key.as_str());
            current = node.parent;
        }

        fragments.iter().rev().copied().collect()
    }

    /// Number of parent hops between `id` and the root.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut parent = self.nodes[id.0].parent;
        while let Some(node_id) = parent {
            depth += 1;
            parent = self.nodes[node_id.0].parent;
        }
        depth
    }

    /// Find the node addressed by `key` without modifying the tree.
    ///
    /// Returns `None` when `key` leaves the tree: either no child continues
    /// it, or it diverges from a fragment before reaching its end.
    pub(crate) fn locate(&self, key: &str) -> Option<Located> {
        if key.is_empty() {
            return Some(Located {
                node: NodeId::ROOT,
                exact: false,
            });
        }

        let mut current = NodeId::ROOT;
        let mut rest = key;
        'descend: loop {
            for &child in &self.nodes[current.0].children {
                let fragment = &self.nodes[child.0].key;
                let common = common_prefix_len(rest, fragment);
                if common == 0 {
                    continue;
                }

                if common == rest.len() {
                    return Some(Located {
                        node: child,
                        exact: common == fragment.len(),
                    });
                }
                if common < fragment.len() {
                    return None;
                }

                rest = &rest[common..];
                current = child;
                continue 'descend;
            }

            return None;
        }
    }

    /// Find the node whose full key is `key`, splitting and appending nodes
    /// as needed. `key` must not be empty.
    fn node_for_key_or_insert(&mut self, key: &str) -> NodeId {
        let mut current = NodeId::ROOT;
        let mut rest = key;
        'descend: loop {
            for position in 0..self.nodes[current.0].children.len() {
                let child = self.nodes[current.0].children[position];
                let fragment_len = self.nodes[child.0].key.len();
                let common = common_prefix_len(rest, &self.nodes[child.0].key);
                if common == 0 {
                    continue;
                }

                if common == rest.len() {
                    if common < fragment_len {
                        // The key is a proper prefix of the fragment.
                        self.split(child, common);
                    }
                    return child;
                }

                if common == fragment_len {
                    rest = &rest[common..];
                    current = child;
                    continue 'descend;
                }

                // Partial match: branch off the shared prefix.
                self.split(child, common);
                return self.append_child(child, &rest[common..]);
            }

            return self.append_child(current, rest);
        }
    }

    /// Split `id`'s fragment at byte `index`.
    ///
    /// The node keeps `key[..index]` and becomes internal. A new child takes
    /// `key[index..]` together with the node's values, children and leaf role.
    fn split(&mut self, id: NodeId, index: usize) {
        let child_id = NodeId(self.nodes.len());
        let node = &mut self.nodes[id.0];

        let suffix = node.key.split_off(index);
        let mut child = Node::with_key(suffix, id);
        child.data = std::mem::take(&mut node.data);
        child.children = std::mem::replace(&mut node.children, vec![child_id]);
        child.is_leaf = std::mem::replace(&mut node.is_leaf, false);

        for &grandchild in &child.children {
            self.nodes[grandchild.0].parent = Some(child_id);
        }
        trace!(
            "split node {} at byte {}: {:?} + {:?}",
            id, index, self.nodes[id.0].key, child.key
        );
        self.nodes.push(child);
    }

    fn mark_leaf(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        if !node.is_leaf {
            node.is_leaf = true;
            self.key_count += 1;
        }
    }

    fn append_child(&mut self, parent: NodeId, key: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::with_key(key.to_string(), parent));
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl<V> Default for PrefixTree<V> {
    fn default() -> Self {
        Self::new()
    }
}
