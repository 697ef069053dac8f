//! Controllable depth-first traversal of a [`PrefixTree`].

use crate::tree::node::NodeId;
use crate::tree::prefix_tree::PrefixTree;
use crate::util::paged_stack::PagedStack;

/// What a traversal callback wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visit {
    /// Do not descend into the current node's children.
    pub skip_subtree: bool,
    /// Stop the traversal right away.
    pub halt: bool,
}

impl Visit {
    /// Keep going, children included.
    pub const CONTINUE: Visit = Visit {
        skip_subtree: false,
        halt: false,
    };

    /// Skip the children of the current node.
    pub const SKIP_SUBTREE: Visit = Visit {
        skip_subtree: true,
        halt: false,
    };

    /// Stop the traversal.
    pub const HALT: Visit = Visit {
        skip_subtree: false,
        halt: true,
    };
}

/// A prefix reached by [`PrefixTree::each_prefix`].
#[derive(Debug)]
pub struct Prefix<'a, V> {
    tree: &'a PrefixTree<V>,
    node: NodeId,
    /// Full key spelled by the path to this node.
    pub key: &'a str,
    /// Values stored under exactly this key.
    pub values: &'a [V],
}

impl<V> Prefix<'_, V> {
    /// The node this prefix ends on.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Depth of the node; children of the root are at depth 1.
    pub fn depth(&self) -> usize {
        self.tree.depth(self.node)
    }

    /// Whether the prefix is itself an inserted key.
    pub fn is_key(&self) -> bool {
        self.tree.node(self.node).is_leaf()
    }
}

impl<V> PrefixTree<V> {
    /// Visit every non-root node exactly once, depth first.
    ///
    /// The callback sees each node's full key and values and steers the
    /// walk through the returned [`Visit`]. The key is rebuilt incrementally:
    /// a parallel stack records how many bytes each node on the current path
    /// appended, so backtracking trims exactly the fragments of the nodes that
    /// were left.
    pub fn each_prefix<F>(&self, mut callback: F)
    where
        F: FnMut(&Prefix<'_, V>) -> Visit,
    {
        let mut stack = PagedStack::with_page_size(self.page_size);
        let mut added_lengths: PagedStack<usize> = PagedStack::with_page_size(self.page_size);
        let mut prefix = String::new();
        let mut last_depth = 0;

        stack.push((NodeId::ROOT, 0usize));
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            if !node.is_root {
                if last_depth >= depth {
                    // Leaving nodes deeper than or level with this one.
                    let mut trimmed = 0;
                    for _ in 0..=(last_depth - depth) {
                        trimmed += added_lengths.pop().unwrap_or(0);
                    }
                    prefix.truncate(prefix.len() - trimmed);
                }
                last_depth = depth;
                prefix.push_str(&node.key);
                added_lengths.push(node.key.len());

                let visit = callback(&Prefix {
                    tree: self,
                    node: id,
                    key: &prefix,
                    values: &node.data,
                });
                if visit.halt {
                    return;
                }
                if visit.skip_subtree {
                    continue;
                }
            }

            stack.push_all(node.children.iter().map(|&child| (child, depth + 1)));
        }
    }
}
