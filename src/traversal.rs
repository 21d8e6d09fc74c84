//! Depth-first and breadth-first walks over a [`Tree`].
//!
//! Every order comes in two forms: one that collects the values into a
//! `Vec` and a `*_with` form that hands each value to a visitor instead.
//!
//! # Examples
//!
//! ```
//! use array_bst::Tree;
//!
//! let tree = Tree::build([1, 2, 3, 4, 5]);
//!
//! assert_eq!(tree.level_order(), vec![3, 2, 5, 1, 4]);
//! assert_eq!(tree.pre_order(), vec![3, 2, 1, 5, 4]);
//! assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(tree.post_order(), vec![1, 2, 4, 5, 3]);
//!
//! let mut sum = 0;
//! tree.in_order_with(|v| sum += v);
//! assert_eq!(sum, 15);
//! ```

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Visits values level by level from the root down, left to right
    /// within a level.
    pub fn level_order_with<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(&node.data);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Visits each node's value before its left and then its right subtree.
    pub fn pre_order_with<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        pre_order(self.root(), &mut visit);
    }

    /// Visits values in ascending order.
    pub fn in_order_with<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        in_order(self.root(), &mut visit);
    }

    /// Visits each node's value after its left and then its right subtree.
    pub fn post_order_with<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        post_order(self.root(), &mut visit);
    }

    /// Collects values in level order. See [`Tree::level_order_with`].
    pub fn level_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        self.level_order_with(|v| values.push(v.clone()));
        values
    }

    /// Collects values in pre-order. See [`Tree::pre_order_with`].
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        self.pre_order_with(|v| values.push(v.clone()));
        values
    }

    /// Collects values in ascending order. See [`Tree::in_order_with`].
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        self.in_order_with(|v| values.push(v.clone()));
        values
    }

    /// Collects values in post-order. See [`Tree::post_order_with`].
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        self.post_order_with(|v| values.push(v.clone()));
        values
    }
}

// The walks below keep their own stacks: a tree grown by sorted inserts is
// as deep as it is long.

fn pre_order<T, F: FnMut(&T)>(root: Option<&Node<T>>, visit: &mut F) {
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        visit(&node.data);
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn in_order<T, F: FnMut(&T)>(root: Option<&Node<T>>, visit: &mut F) {
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        visit(&node.data);
        current = node.right();
    }
}

fn post_order<T, F: FnMut(&T)>(root: Option<&Node<T>>, visit: &mut F) {
    // Node, right, left reversed is left, right, node.
    let mut stack: Vec<&Node<T>> = root.into_iter().collect();
    let mut reversed = Vec::new();
    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    for node in reversed.into_iter().rev() {
        visit(&node.data);
    }
}
