use array_bst::{Node, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], mut bst: Tree<T>, set: &mut BTreeSet<T>) -> Tree<T>
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Delete(v) => {
                assert_eq!(bst.delete(v).is_some(), set.remove(v));
            }
            Op::Rebalance => bst.rebalance(),
        }
    }

    bst
}

/// Checks the ordering invariant at every node, not just through `in_order`.
fn is_ordered<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
    match node {
        None => true,
        Some(n) => {
            low.map_or(true, |low| low < n.data())
                && high.map_or(true, |high| n.data() < high)
                && is_ordered(n.left(), low, Some(n.data()))
                && is_ordered(n.right(), Some(n.data()), high)
        }
    }
}

/// The smallest height a tree of `n` nodes can have.
fn min_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut set = BTreeSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    is_ordered(tree.root(), None, None)
        && tree.len() == set.len()
        && tree.in_order() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn build_sorts_and_dedups(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    is_ordered(tree.root(), None, None) && tree.in_order() == expected
}

#[quickcheck]
fn build_has_minimal_height(xs: Vec<i16>) -> bool {
    let tree = Tree::build(xs);

    tree.height() == min_height(tree.len())
        && (tree.is_empty() || tree.is_balanced() == Ok(true))
}

#[quickcheck]
fn contains(xs: Vec<i8>, v: i8) -> bool {
    let mut tree = Tree::build(xs);
    tree.insert(v);

    tree.find(&v).map(|n| *n.data()) == Some(v)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.clone());
    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for delete in &deletes {
        tree.delete(delete);
        still_present.remove(delete);
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && tree.in_order() == still_present.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn deleting_missing_value_changes_nothing(xs: Vec<i8>, v: i8) -> bool {
    let mut tree = Tree::build(xs.into_iter().filter(|x| *x != v));
    let before = tree.clone();

    tree.delete(&v).is_none() && tree == before
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i8>, inserts: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs);
    tree.extend(inserts);
    let values = tree.in_order();

    tree.rebalance();
    let once = tree.clone();
    tree.rebalance();

    tree == once
        && tree.in_order() == values
        && tree.height() == min_height(values.len())
}

#[quickcheck]
fn pre_order_round_trips(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    Tree::build(tree.pre_order()).in_order() == tree.in_order()
}

#[quickcheck]
fn depth_of_every_node(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    tree.extend(xs);

    tree.in_order().iter().all(|v| {
        tree.find(v)
            .map(|node| tree.depth(node).map_or(false, |d| d < tree.height()))
            .unwrap_or(false)
    })
}
