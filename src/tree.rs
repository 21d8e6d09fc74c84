//! The array-seeded `Tree`. Construction and [`Tree::rebalance`] pick the
//! middle of a sorted run of values as each subtree root, so the result is
//! height balanced. Inserting and deleting mutate nodes in place and never
//! rebalance.
//!
//! # Examples
//!
//! ```
//! use array_bst::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 3]);
//!
//! // Duplicates are dropped.
//! assert_eq!(tree.in_order(), vec![3, 5, 8]);
//!
//! // Inserting a value that's already there does nothing.
//! tree.insert(5);
//! assert_eq!(tree.len(), 3);
//!
//! // Deleting returns the value if it was present.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.delete(&5), None);
//! assert!(tree.find(&5).is_none());
//! ```

use std::cmp::Ordering;
use std::mem;

use crate::error::{TreeError, TreeResult};
use crate::node::{self, Link, Node};
use crate::util::sorted_unique;

/// A Binary Search Tree of unique values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Skewed trees are as deep as they are long, so nodes are released from an
// explicit stack instead of by recursive `Box` drops.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree has any nodes.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree.
    pub fn len(&self) -> usize {
        let mut len = 0;
        self.pre_order_with(|_| len += 1);
        len
    }

    /// Number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }
}

impl<T: Ord> Tree<T> {
    /// Builds a balanced tree from `values`, which may come in any order and
    /// may repeat. Values are sorted and deduplicated, then the middle value
    /// becomes the root and each half is built the same way. When a run has
    /// an even length the right half is the shorter one.
    ///
    /// Building from the same set of values always yields the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2, 4, 2]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.data()), Some(3));
    /// assert_eq!(tree.level_order(), vec![3, 2, 4, 1]);
    /// assert_eq!(tree, Tree::build([4, 3, 2, 1]));
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            root: build_sorted(sorted_unique(values.into_iter().collect())),
        }
    }

    /// Inserts `value` and returns the node holding it. If the value is
    /// already present the existing node is returned untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1).data(), &1);
    /// assert_eq!(tree.insert(1).data(), &1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> &Node<T> {
        insert(&mut self.root, value)
    }

    /// Potentially finds the node holding `value`. If no node has the value,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&2).map(|n| *n.data()), Some(2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref()?;
        loop {
            current = match value.cmp(&current.data) {
                Ordering::Less => current.left.as_deref()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right.as_deref()?,
            };
        }
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Deletes `value` from the tree and returns it. If the tree does not
    /// hold the value, nothing happens.
    ///
    /// A node with two children is not unlinked. Its in-order successor (the
    /// smallest value in its right subtree) is spliced out instead and its
    /// value moves into the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.level_order(), vec![3, 1]);
    /// assert_eq!(tree.delete(&42), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        delete(&mut self.root, value)
    }

    /// Number of edges between the root and `node`.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no root, and
    /// [`TreeError::NodeNotInTree`] if `node` is not a node of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::build([1, 2, 3]);
    /// let other = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(tree.find(&1).unwrap()), Ok(1));
    /// assert_eq!(tree.depth(other.find(&1).unwrap()), Err(TreeError::NodeNotInTree));
    /// ```
    pub fn depth(&self, node: &Node<T>) -> TreeResult<usize> {
        self.root
            .as_deref()
            .ok_or(TreeError::EmptyTree)?
            .depth_of(node)
            .ok_or(TreeError::NodeNotInTree)
    }

    /// Whether the heights of the root's two subtrees differ by at most one.
    /// Only the root is inspected; subtrees further down may be lopsided.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`] if the tree has no root.
    pub fn is_balanced(&self) -> TreeResult<bool> {
        let root = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        let left = node::height(&root.left);
        let right = node::height(&root.right);
        Ok(left.abs_diff(right) <= 1)
    }

    /// Rebuilds the tree from its sorted values the same way [`Tree::build`]
    /// does. The old nodes are dropped.
    pub fn rebalance(&mut self) {
        let old_height = self.height();
        let mut values = Vec::new();
        drain_in_order(self.root.take(), &mut values);
        let len = values.len();

        self.root = build_sorted(values);
        log::debug!(
            "rebalanced {} nodes, height {} -> {}",
            len,
            old_height,
            self.height()
        );
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Builds a subtree from strictly increasing `values`.
fn build_sorted<T>(mut values: Vec<T>) -> Link<T> {
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    let right = values.split_off(mid + 1);
    let data = values.pop()?;
    let left = values;

    Some(Box::new(Node::with_children(
        data,
        build_sorted(left),
        build_sorted(right),
    )))
}

/// Walks down from `link` to the link that holds `value`, or to the empty
/// link where it would be inserted.
fn descend<'a, T: Ord>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    // Compare through a shared borrow so that stopping at `Equal` leaves no
    // mutable loan on `link`.
    while let Some(ordering) = link.as_deref().map(|node| value.cmp(&node.data)) {
        if ordering == Ordering::Equal {
            break;
        }
        let Some(node) = link.as_mut() else {
            unreachable!("`descend` compared against a missing node");
        };
        link = if ordering == Ordering::Less {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    link
}

fn insert<T: Ord>(link: &mut Link<T>, value: T) -> &mut Node<T> {
    let link = descend(link, &value);
    link.get_or_insert_with(|| Box::new(Node::new(value)))
}

fn delete<T: Ord>(link: &mut Link<T>, value: &T) -> Option<T> {
    let link = descend(link, value);
    let Some(node) = link.as_mut() else {
        log::trace!("value to delete not found");
        return None;
    };

    if node.left.is_some() && node.right.is_some() {
        // The successor has no left child so splicing it out is just
        // lifting its right subtree into its place.
        let successor = take_min(&mut node.right)?;
        log::trace!("deleted a node with two children, promoted its successor");
        return Some(mem::replace(&mut node.data, successor));
    }

    let Node { data, left, right } = *link.take()?;
    *link = left.or(right);
    log::trace!("deleted a node with at most one child");
    Some(data)
}

/// Unlinks the leftmost node behind `link`, replacing it with its right
/// subtree, and returns its value.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let Node { data, right, .. } = *link.take()?;
    *link = right;
    Some(data)
}

/// Moves every value out of the subtree in ascending order.
fn drain_in_order<T>(mut link: Link<T>, values: &mut Vec<T>) {
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    loop {
        while let Some(mut node) = link {
            link = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        let Node { data, right, .. } = *node;
        values.push(data);
        link = right;
    }
}
