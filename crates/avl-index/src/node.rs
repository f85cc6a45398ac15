/// Owned link to a child subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A tree node: payload, two owned children and the cached subtree height.
///
/// Nodes are passive. All height bookkeeping happens in
/// [`fix_height`](crate::fix_height), called by the insertion path.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub payload: T,
    pub left: Link<T>,
    pub right: Link<T>,
    /// Height of the subtree rooted here; a leaf is 0, an absent node -1.
    pub height: i32,
}

impl<T> Node<T> {
    /// Creates a leaf.
    pub fn new(payload: T) -> Self {
        Self::with_children(payload, None, None)
    }

    /// Creates a node with the given children.
    ///
    /// Height starts at 0 regardless of the children; call
    /// [`fix_height`](crate::fix_height) afterwards if either is present.
    pub fn with_children(payload: T, left: Link<T>, right: Link<T>) -> Self {
        Self {
            payload,
            left,
            right,
            height: 0,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}
