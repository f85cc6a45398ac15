use std::cmp::Ordering;
use std::time::Instant;

use crate::error::TreeError;
use crate::metrics::Metrics;
use crate::node::{Link, Node};
use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::types::Keyed;
use crate::util::{assert_avl_tree, balance, height, print, tree_height, tree_size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// AVL-balanced binary search tree.
///
/// Insertion orders payloads with their [`PartialOrd`] implementation and
/// places payloads equal to a stored one in its left subtree. Lookup goes by
/// [`Keyed::key`], compared case-insensitively.
///
/// Those two orders are not unified. If two keys differ only by letter case,
/// the case-sensitive position chosen on insert can diverge from the path a
/// case-insensitive [`find`](Self::find) walks, and the lookup misses.
///
/// Every tree owns its own [`Metrics`].
#[derive(Clone, Debug)]
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
    metrics: Metrics,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            metrics: Metrics::default(),
        }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Cached height of the root, -1 when empty.
    pub fn height(&self) -> i32 {
        height(self.root())
    }

    /// Height recomputed from the structure.
    pub fn computed_height(&self) -> i32 {
        tree_height(self.root())
    }

    /// Node count recomputed from the structure.
    pub fn computed_size(&self) -> usize {
        tree_size(self.root())
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }
}

impl<T: Keyed> AvlTree<T> {
    /// Looks up a node by key, ignoring letter case.
    ///
    /// Every search step counts as one comparison, including the final step
    /// onto an absent child; a lookup in an empty tree therefore costs one.
    pub fn find(&mut self, key: &str) -> Option<&Node<T>> {
        let start = Instant::now();
        let needle = key.to_lowercase();
        let found = search(
            self.root.as_deref(),
            &needle,
            &mut self.metrics.search_comparisons,
        );
        self.metrics.search_time += start.elapsed();
        found
    }

    pub fn contains(&mut self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn print(&self, tab: &str) -> String {
        print(self.root(), tab)
    }
}

impl<T: PartialOrd + Keyed> AvlTree<T> {
    /// Inserts `payload` and rebalances the path back to the root.
    ///
    /// All comparisons happen before the first link is rewritten. If any of
    /// them has no answer, [`TreeError::Unordered`] is returned and neither
    /// the tree nor its metrics change.
    pub fn insert(&mut self, payload: T) -> Result<(), TreeError> {
        let start = Instant::now();
        let path = descend(self.root(), &payload)?;
        self.metrics.insert_comparisons += path.len() as u64;
        let root = insert_at(self.root.take(), payload, &path, &mut self.metrics);
        self.root = Some(root);
        self.len += 1;
        self.metrics.insertion_time += start.elapsed();
        self.metrics.max_height = self.metrics.max_height.max(self.height());
        Ok(())
    }

    /// Inserts payloads in iteration order.
    ///
    /// Stops at the first payload [`insert`](Self::insert) rejects and
    /// returns its error. Payloads before it stay in the tree; the rest of
    /// `iter` is not consumed.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), TreeError> {
        for payload in iter {
            self.insert(payload)?;
        }
        Ok(())
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(self.root())?;
        let size = self.computed_size();
        if size != self.len {
            return Err(format!("Size mismatch: len {}, counted {size}", self.len));
        }
        Ok(())
    }
}

/// Read-only walk to the insertion point, one comparison per stored node.
fn descend<T: PartialOrd + Keyed>(
    mut node: Option<&Node<T>>,
    payload: &T,
) -> Result<Vec<Side>, TreeError> {
    let mut path = Vec::new();
    while let Some(n) = node {
        let side = match payload.partial_cmp(&n.payload) {
            Some(Ordering::Greater) => Side::Right,
            Some(_) => Side::Left,
            None => {
                return Err(TreeError::Unordered {
                    key: payload.key().into_owned(),
                    existing: n.payload.key().into_owned(),
                })
            }
        };
        node = match side {
            Side::Left => n.left(),
            Side::Right => n.right(),
        };
        path.push(side);
    }
    Ok(path)
}

/// Replays `path`, attaches a new leaf at its end and balances every node on
/// the way back up.
fn insert_at<T>(
    node: Link<T>,
    payload: T,
    path: &[Side],
    metrics: &mut Metrics,
) -> Box<Node<T>> {
    match (node, path.split_first()) {
        (None, _) => Box::new(Node::new(payload)),
        (Some(mut node), Some((side, rest))) => {
            match side {
                Side::Left => {
                    node.left = Some(insert_at(node.left.take(), payload, rest, metrics));
                }
                Side::Right => {
                    node.right = Some(insert_at(node.right.take(), payload, rest, metrics));
                }
            }
            balance(node, metrics)
        }
        (Some(_), None) => unreachable!("insertion path ends above an empty slot"),
    }
}

fn search<'a, T: Keyed>(
    node: Option<&'a Node<T>>,
    needle: &str,
    comparisons: &mut u64,
) -> Option<&'a Node<T>> {
    *comparisons += 1;
    let node = node?;
    match needle.cmp(node.payload.key().to_lowercase().as_str()) {
        Ordering::Equal => Some(node),
        Ordering::Less => search(node.left(), needle, comparisons),
        Ordering::Greater => search(node.right(), needle, comparisons),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build<T: PartialOrd + Keyed>(payloads: impl IntoIterator<Item = T>) -> AvlTree<T> {
        let mut tree = AvlTree::new();
        tree.try_extend(payloads).unwrap();
        tree
    }

    fn keys(tree: &AvlTree<i32>) -> Vec<i32> {
        tree.in_order().copied().collect()
    }

    #[test]
    fn ascending_triple_needs_one_single_rotation() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for v in [1, 2, 3] {
            tree.insert(v).unwrap();
        }
        let root = tree.root().unwrap();
        assert_eq!(root.payload, 2);
        assert_eq!(root.left().map(|n| n.payload), Some(1));
        assert_eq!(root.right().map(|n| n.payload), Some(3));
        let m = tree.metrics();
        assert_eq!(m.single_rotations, 1);
        assert_eq!(m.double_rotations, 0);
        assert_eq!(m.insert_comparisons, 3);
        assert_eq!(m.max_height, 1);
    }

    #[test]
    fn left_right_zig_zag_needs_one_double_rotation() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for v in [3, 1, 2] {
            tree.insert(v).unwrap();
        }
        let root = tree.root().unwrap();
        assert_eq!(root.payload, 2);
        assert_eq!(root.left().map(|n| n.payload), Some(1));
        assert_eq!(root.right().map(|n| n.payload), Some(3));
        let m = tree.metrics();
        assert_eq!(m.double_rotations, 1);
        assert_eq!(m.single_rotations, 2);
    }

    #[test]
    fn right_left_zig_zag_needs_one_double_rotation() {
        let mut tree = build([1, 3, 2]);
        assert_eq!(tree.root().map(|n| n.payload), Some(2));
        assert_eq!(tree.metrics().double_rotations, 1);
        assert_eq!(tree.metrics().single_rotations, 2);
        assert!(tree.contains("3"));
    }

    #[test]
    fn equal_payload_goes_left() {
        let mut tree: AvlTree<&str> = AvlTree::new();
        tree.insert("same").unwrap();
        tree.insert("same").unwrap();
        assert_eq!(tree.len(), 2);
        let root = tree.root().unwrap();
        assert!(root.left().is_some());
        assert!(root.right().is_none());
        assert_eq!(tree.in_order().count(), 2);
    }

    #[test]
    fn find_on_empty_tree_costs_one_comparison() {
        let mut tree: AvlTree<String> = AvlTree::new();
        assert!(tree.find("anything").is_none());
        assert_eq!(tree.metrics().search_comparisons, 1);
        assert_eq!(tree.metrics().total_comparisons(), 1);
    }

    #[test]
    fn find_counts_the_step_onto_an_absent_child() {
        let mut tree = build(["b", "a", "c"]);
        assert!(tree.find("b").is_some());
        assert_eq!(tree.metrics().search_comparisons, 1);
        assert!(tree.find("a").is_some());
        assert_eq!(tree.metrics().search_comparisons, 3);
        assert!(tree.find("bb").is_none());
        assert_eq!(tree.metrics().search_comparisons, 6);
    }

    #[test]
    fn find_ignores_case() {
        let mut tree: AvlTree<String> = AvlTree::new();
        for k in ["Apple", "banana", "Cherry"] {
            tree.insert(k.to_string()).unwrap();
        }
        assert_eq!(tree.find("APPLE").map(|n| n.payload.as_str()), Some("Apple"));
        assert_eq!(tree.find("cherry").map(|n| n.payload.as_str()), Some("Cherry"));
        assert!(tree.find("durian").is_none());
    }

    #[test]
    fn case_only_differences_can_hide_a_key() {
        // Case-sensitive order: "B" < "a" < "c", so "B" lands left of "a".
        // Case-insensitive search for "b" walks right of "a" and misses.
        let mut tree = build(["a", "c", "B"]);
        tree.assert_valid().unwrap();
        assert_eq!(tree.root().map(|n| n.payload), Some("a"));
        assert!(tree.find("b").is_none());
        assert!(tree.find("B").is_none());
    }

    #[test]
    fn unordered_payload_is_rejected_without_side_effects() {
        let mut tree: AvlTree<f64> = AvlTree::new();
        for v in [2.0, 1.0, 3.0] {
            tree.insert(v).unwrap();
        }
        let before = tree.metrics();
        let shape = tree.print("");

        let err = tree.insert(f64::NAN).unwrap_err();
        assert_eq!(
            err,
            TreeError::Unordered {
                key: "NaN".to_string(),
                existing: "2".to_string(),
            }
        );
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.print(""), shape);
        assert_eq!(tree.metrics().insert_comparisons, before.insert_comparisons);
        assert_eq!(tree.metrics().single_rotations, before.single_rotations);
    }

    #[test]
    fn try_extend_stops_at_the_first_unordered_payload() {
        let mut tree: AvlTree<f64> = AvlTree::new();
        let err = tree.try_extend([1.0, f64::NAN, 2.0]).unwrap_err();
        assert_eq!(
            err,
            TreeError::Unordered {
                key: "NaN".to_string(),
                existing: "1".to_string(),
            }
        );
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1.0]);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn try_extend_inserts_everything_when_ordered() {
        let mut tree: AvlTree<f64> = AvlTree::new();
        tree.try_extend([2.5, -1.0, 7.0, 0.0]).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(
            tree.in_order().copied().collect::<Vec<_>>(),
            vec![-1.0, 0.0, 2.5, 7.0]
        );
    }

    #[test]
    fn nan_into_empty_tree_is_accepted() {
        // No stored payload to compare against.
        let mut tree: AvlTree<f64> = AvlTree::new();
        tree.insert(f64::NAN).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn ladder_stays_balanced() {
        let mut tree: AvlTree<i32> = AvlTree::new();
        for i in 0..300 {
            tree.insert(i).unwrap();
            tree.assert_valid().unwrap();
        }
        assert_eq!(tree.len(), 300);
        assert_eq!(keys(&tree), (0..300).collect::<Vec<_>>());
        // 1.44 * log2(301) bounds an AVL tree of 300 nodes.
        assert!(tree.height() <= 11, "height {}", tree.height());
        assert_eq!(tree.height(), tree.computed_height());
        assert_eq!(tree.metrics().max_height, tree.height());
    }

    #[test]
    fn empty_tree_shape() {
        let tree: AvlTree<i32> = AvlTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.computed_size(), 0);
        assert_eq!(tree.print(""), "∅");
        assert_eq!(tree.metrics(), Metrics::default());
        assert_eq!(tree.assert_valid(), Ok(()));
    }
}
