//! Height bookkeeping, rotations and structural checks.
//!
//! These operate on owned subtrees (`Box<Node<T>>`) and return the new
//! subtree root, so callers rebind the link they took the subtree from.
//! Rotation counters are charged to the [`Metrics`] passed in.

use std::cmp::Ordering;

use crate::metrics::Metrics;
use crate::node::Node;
use crate::types::Keyed;

/// Cached height of `node`, or -1 when absent.
#[inline]
pub fn height<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(-1, |n| n.height)
}

/// `height(right) - height(left)`.
#[inline]
pub fn balance_factor<T>(node: &Node<T>) -> i32 {
    height(node.right.as_deref()) - height(node.left.as_deref())
}

/// Recomputes the cached height from the children's cached heights.
#[inline]
pub fn fix_height<T>(node: &mut Node<T>) {
    node.height = 1 + height(node.left.as_deref()).max(height(node.right.as_deref()));
}

/// Lifts the left child of `p` into its place.
///
/// # Panics
///
/// If `p` has no left child.
pub fn rotate_right<T>(mut p: Box<Node<T>>, metrics: &mut Metrics) -> Box<Node<T>> {
    let mut q = p.left.take().expect("rotate_right requires a left child");
    metrics.single_rotations += 1;
    p.left = q.right.take();
    fix_height(&mut p);
    q.right = Some(p);
    fix_height(&mut q);
    q
}

/// Lifts the right child of `q` into its place.
///
/// # Panics
///
/// If `q` has no right child.
pub fn rotate_left<T>(mut q: Box<Node<T>>, metrics: &mut Metrics) -> Box<Node<T>> {
    let mut p = q.right.take().expect("rotate_left requires a right child");
    metrics.single_rotations += 1;
    q.right = p.left.take();
    fix_height(&mut q);
    p.left = Some(q);
    fix_height(&mut p);
    p
}

/// Refreshes the height of `p` and repairs a +/-2 imbalance.
///
/// Children must already satisfy the AVL bound. Zig-zag shapes (right-left,
/// left-right) first rotate the child, which is what counts as a double
/// rotation.
pub fn balance<T>(mut p: Box<Node<T>>, metrics: &mut Metrics) -> Box<Node<T>> {
    fix_height(&mut p);
    match balance_factor(&p) {
        2 => {
            if let Some(right) = p.right.take() {
                p.right = Some(if balance_factor(&right) < 0 {
                    metrics.double_rotations += 1;
                    rotate_right(right, metrics)
                } else {
                    right
                });
            }
            rotate_left(p, metrics)
        }
        -2 => {
            if let Some(left) = p.left.take() {
                p.left = Some(if balance_factor(&left) > 0 {
                    metrics.double_rotations += 1;
                    rotate_left(left, metrics)
                } else {
                    left
                });
            }
            rotate_right(p, metrics)
        }
        _ => p,
    }
}

/// Height recomputed from the structure, ignoring cached values.
pub fn tree_height<T>(node: Option<&Node<T>>) -> i32 {
    match node {
        None => -1,
        Some(n) => 1 + tree_height(n.left()).max(tree_height(n.right())),
    }
}

/// Node count recomputed from the structure.
pub fn tree_size<T>(node: Option<&Node<T>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + tree_size(n.left()) + tree_size(n.right()),
    }
}

/// Checks cached heights, the AVL bound and in-order payload order.
pub fn assert_avl_tree<T>(root: Option<&Node<T>>) -> Result<(), String>
where
    T: PartialOrd + Keyed,
{
    fn validate_heights<T: Keyed>(node: Option<&Node<T>>) -> Result<i32, String> {
        let Some(n) = node else {
            return Ok(-1);
        };
        let lh = validate_heights(n.left())?;
        let rh = validate_heights(n.right())?;
        let expected = 1 + lh.max(rh);
        if n.height != expected {
            return Err(format!(
                "Height mismatch at `{}`: expected {expected}, got {}",
                n.payload.key(),
                n.height
            ));
        }
        if (rh - lh).abs() > 1 {
            return Err(format!(
                "AVL balance violated at `{}`: balance factor {}",
                n.payload.key(),
                rh - lh
            ));
        }
        Ok(expected)
    }

    validate_heights(root)?;

    let mut prev: Option<&T> = None;
    for curr in crate::traverse::InOrder::new(root) {
        if let Some(prev) = prev {
            if !matches!(
                prev.partial_cmp(curr),
                Some(Ordering::Less | Ordering::Equal)
            ) {
                return Err(format!(
                    "Node order violated: `{}` before `{}`",
                    prev.key(),
                    curr.key()
                ));
            }
        }
        prev = Some(curr);
    }

    Ok(())
}

/// Debug printer: one node per line with its cached height.
pub fn print<T: Keyed>(node: Option<&Node<T>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let left = print(n.left(), &format!("{tab}  "));
            let right = print(n.right(), &format!("{tab}  "));
            format!(
                "{} [h={}]\n{tab}← {left}\n{tab}→ {right}",
                n.payload.key(),
                n.height
            )
        }
    }
}
