//! Sideways drawing of a [`Tree`]: the root sits at the left margin, right
//! subtrees are drawn above their parent and left subtrees below.
//!
//! ```
//! use array_bst::Tree;
//!
//! let tree = Tree::build([1, 2, 3]);
//! let expected = "\
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ";
//! assert_eq!(tree.to_string(), expected);
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => draw(root, "", true, f),
            None => Ok(()),
        }
    }
}

fn draw<T: fmt::Display>(
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let gutter = if is_left { "│   " } else { "    " };
        draw(right, &format!("{}{}", prefix, gutter), false, f)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, connector, node.data())?;

    if let Some(left) = node.left() {
        let gutter = if is_left { "    " } else { "│   " };
        draw(left, &format!("{}{}", prefix, gutter), true, f)?;
    }
    Ok(())
}
