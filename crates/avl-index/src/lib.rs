//! Height-balanced (AVL) binary search tree.
//!
//! Payloads live in owned [`Node`]s (`Option<Box<Node<T>>>` links, no parent
//! pointers). Every node caches the height of its subtree; after each
//! insertion the nodes on the insertion path are rebalanced bottom-up so that
//! sibling subtrees never differ in height by more than one.
//!
//! Each [`AvlTree`] keeps its own [`Metrics`]: comparison counts, rotation
//! counts, cumulative operation time and the largest height reached.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`node`] | [`Node`] and the [`Link`] alias |
//! [`types`] | [`Keyed`] payload key accessor |
//! [`util`] | `height`, `balance_factor`, `fix_height`, rotations, `balance`, validation, printer |
//! [`tree`] | [`AvlTree`]: `insert`, `find`, traversal |
//! [`traverse`] | pre/in/post/level-order iterators |
//! [`metrics`] | [`Metrics`] snapshot and its serialized [`MetricsReport`] |
//!
//! # Example
//!
//! ```
//! use avl_index::AvlTree;
//!
//! let mut tree: AvlTree<String> = AvlTree::new();
//! for term in ["Walrus", "ant", "Bee"] {
//!     tree.insert(term.to_string()).unwrap();
//! }
//! assert!(tree.find("WALRUS").is_some());
//! assert!(tree.find("moth").is_none());
//! assert_eq!(tree.metrics().search_comparisons, 4);
//! ```

pub mod error;
pub mod metrics;
pub mod node;
pub mod traverse;
pub mod tree;
pub mod types;
pub mod util;

pub use error::TreeError;
pub use metrics::{Metrics, MetricsReport};
pub use node::{Link, Node};
pub use tree::AvlTree;
pub use types::Keyed;
pub use util::{
    assert_avl_tree, balance, balance_factor, fix_height, height, print, rotate_left, rotate_right,
};
