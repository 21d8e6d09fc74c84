//! The `Node` records a [`Tree`][crate::Tree] is made of.

use std::cmp::Ordering;
use std::ptr;

/// An owning link to an optional child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` holds a value and exclusively owns up to two children. Every value
/// in its left subtree is smaller than its own and every value in its right
/// subtree is larger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `data`.
    pub(crate) fn new(data: T) -> Self {
        Self::with_children(data, None, None)
    }

    pub(crate) fn with_children(data: T, left: Link<T>, right: Link<T>) -> Self {
        Self { data, left, right }
    }

    /// The value stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 3);
    /// assert_eq!(tree.find(&1).unwrap().height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = vec![self];
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Counts the edges from this node down to `target` by searching for the
    /// target's value. `target` must be the very node found this way, not just
    /// a node holding an equal value, otherwise `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4, 5, 6, 7]);
    /// let root = tree.root().unwrap();
    /// let one = tree.find(&1).unwrap();
    /// let two = tree.find(&2).unwrap();
    ///
    /// assert_eq!(root.depth_of(one), Some(2));
    /// assert_eq!(two.depth_of(one), Some(1));
    /// assert_eq!(one.depth_of(root), None);
    /// ```
    pub fn depth_of(&self, target: &Node<T>) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self;
        let mut depth = 0;
        loop {
            if ptr::eq(current, target) {
                return Some(depth);
            }
            current = match target.data.cmp(&current.data) {
                Ordering::Less => current.left.as_deref()?,
                Ordering::Equal => return None,
                Ordering::Greater => current.right.as_deref()?,
            };
            depth += 1;
        }
    }
}

/// Height of the subtree behind `link`. An absent subtree has a height of 0.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(data: i32) -> Link<i32> {
        Some(Box::new(Node::new(data)))
    }

    #[test]
    fn test_height() {
        let node = Node::new(1);
        assert!(node.is_leaf());
        assert_eq!(node.height(), 1);
        assert_eq!(height::<i32>(&None), 0);

        // A right-leaning chain 1 -> 2 -> 3.
        let chain = Node::with_children(
            1,
            None,
            Some(Box::new(Node::with_children(2, None, leaf(3)))),
        );
        assert!(!chain.is_leaf());
        assert_eq!(chain.height(), 3);
        assert_eq!(chain.left().map(Node::height), None);
        assert_eq!(chain.right().map(Node::height), Some(2));
    }

    #[test]
    fn test_depth_of() {
        let root = Node::with_children(2, leaf(1), leaf(3));
        let left = root.left().unwrap();
        let right = root.right().unwrap();

        assert_eq!(root.depth_of(&root), Some(0));
        assert_eq!(root.depth_of(left), Some(1));
        assert_eq!(root.depth_of(right), Some(1));
    }

    #[test]
    fn test_depth_of_foreign_node() {
        let root = Node::with_children(2, leaf(1), leaf(3));

        // Same value, different node.
        let impostor = Node::new(3);
        assert_eq!(root.depth_of(&impostor), None);

        // Value that isn't in the tree at all.
        let missing = Node::new(4);
        assert_eq!(root.depth_of(&missing), None);
    }
}
