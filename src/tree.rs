//! Radix tree used to index dictionary tokens.
//!
//! The tree maps string keys to lists of values and answers exact, prefix and
//! full-traversal queries without recursion: every walk is driven by a
//! [`PagedStack`](crate::util::paged_stack::PagedStack).

pub mod lcp;
pub mod node;
pub mod prefix_tree;
pub mod traversal;

// Re-export commonly used types
pub use node::{Node, NodeId};
pub use prefix_tree::PrefixTree;
pub use traversal::{Prefix, Visit};
