use std::borrow::Cow;
use std::cmp::Ordering;

use avl_index::{fix_height, height, AvlTree, Keyed, Node, TreeError};

/// Payload ordered by `key` only, carrying an insertion tag.
#[derive(Debug, Clone)]
struct Entry {
    key: &'static str,
    tag: u32,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(other.key)
    }
}

impl Keyed for Entry {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.key)
    }
}

fn assert_cached_heights<T>(node: Option<&Node<T>>) -> i32 {
    let Some(n) = node else {
        return -1;
    };
    let lh = assert_cached_heights(n.left());
    let rh = assert_cached_heights(n.right());
    assert_eq!(n.height(), 1 + lh.max(rh));
    assert!((rh - lh).abs() <= 1);
    n.height()
}

#[test]
fn rotation_shape_matrix() {
    // (insertion order, single rotations, double rotations)
    let cases: [([i32; 3], u64, u64); 4] = [
        ([1, 2, 3], 1, 0),
        ([3, 2, 1], 1, 0),
        ([3, 1, 2], 2, 1),
        ([1, 3, 2], 2, 1),
    ];
    for (order, single, double) in cases {
        let mut tree = AvlTree::new();
        for v in order {
            tree.insert(v).unwrap();
        }
        let root = tree.root().unwrap();
        assert_eq!(root.payload, 2, "{order:?}");
        assert_eq!(root.left().map(|n| n.payload), Some(1), "{order:?}");
        assert_eq!(root.right().map(|n| n.payload), Some(3), "{order:?}");
        assert_eq!(root.height(), 1);
        assert_eq!(tree.metrics().single_rotations, single, "{order:?}");
        assert_eq!(tree.metrics().double_rotations, double, "{order:?}");
    }
}

#[test]
fn duplicate_keys_are_kept_left_matrix() {
    let mut tree = AvlTree::new();
    tree.insert(Entry { key: "owl", tag: 1 }).unwrap();
    tree.insert(Entry { key: "owl", tag: 2 }).unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.computed_size(), 2);

    let root = tree.root().unwrap();
    assert_eq!(root.payload.tag, 1);
    assert_eq!(root.left().map(|n| n.payload.tag), Some(2));
    assert!(root.right().is_none());

    // A third copy rotates, but nothing is lost.
    tree.insert(Entry { key: "owl", tag: 3 }).unwrap();
    let mut tags: Vec<u32> = tree.in_order().map(|e| e.tag).collect();
    tags.sort_unstable();
    assert_eq!(tags, vec![1, 2, 3]);
    tree.assert_valid().unwrap();
}

#[test]
fn heights_match_recomputation_matrix() {
    let mut tree = AvlTree::new();
    let values = [50, 20, 80, 10, 30, 25, 27, 26, 90, 95, 99, 5, 1, 0, 28, 29];
    for v in values {
        tree.insert(v).unwrap();
        assert_cached_heights(tree.root());
    }
    assert_eq!(tree.height(), tree.computed_height());
    tree.assert_valid().unwrap();
}

#[test]
fn fix_height_twice_is_stable_matrix() {
    let mut tree = AvlTree::new();
    for v in 0..20 {
        tree.insert(v).unwrap();
    }
    let mut root = tree.root().unwrap().clone();
    let h = root.height();
    fix_height(&mut root);
    fix_height(&mut root);
    assert_eq!(root.height(), h);
    assert_eq!(height(Some(&root)), h);
}

#[test]
fn traversal_orders_matrix() {
    let mut tree: AvlTree<i32> = AvlTree::new();
    tree.try_extend([4, 2, 6, 1, 3, 5, 7]).unwrap();
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), vec![1, 3, 2, 5, 7, 6, 4]);
    assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(tree.metrics().single_rotations, 0);
}

#[test]
fn lookup_metrics_matrix() {
    let mut tree: AvlTree<String> = AvlTree::new();
    for w in ["mango", "kiwi", "pear", "fig", "lime", "plum"] {
        tree.insert(w.to_string()).unwrap();
    }
    let inserted = tree.metrics();

    assert!(tree.find("Mango").is_some());
    assert_eq!(tree.metrics().search_comparisons, 1);
    assert!(tree.find("FIG").is_some());
    assert_eq!(tree.metrics().search_comparisons, 4);
    assert!(!tree.contains("grape"));
    assert_eq!(tree.metrics().search_comparisons, 8);

    let m = tree.metrics();
    assert_eq!(m.insert_comparisons, inserted.insert_comparisons);
    assert_eq!(m.total_comparisons(), m.insert_comparisons + 8);
    assert!(m.search_time >= inserted.search_time);
}

#[test]
fn independent_trees_have_independent_metrics() {
    let mut a: AvlTree<i32> = AvlTree::new();
    a.try_extend(0..10).unwrap();
    let b: AvlTree<i32> = AvlTree::new();
    a.find("3");
    assert!(a.metrics().total_comparisons() > 0);
    assert_eq!(b.metrics().total_comparisons(), 0);
}

#[test]
fn bulk_build_surfaces_unordered_payload() {
    let mut tree: AvlTree<f64> = AvlTree::new();
    let err = tree.try_extend([3.0, 1.0, f64::NAN, 2.0]).unwrap_err();
    assert!(matches!(err, TreeError::Unordered { ref key, .. } if key == "NaN"));
    assert_eq!(tree.len(), 2);
    assert!(!tree.contains("2"));
    tree.assert_valid().unwrap();
}
