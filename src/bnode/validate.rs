use derive_more::Display;
use thiserror::Error;

use super::BNode;

/// Which child slot of a node.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Side {
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "right")]
    Right,
}

impl Side {
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}

/// Parent back-references that disagree with the owning links.
///
/// `depth` is counted from the node handed to [`check_links`], which sits at depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BNodeError {
    #[error("{side} child at depth {depth} has no parent link")]
    DetachedChild { side: Side, depth: usize },
    #[error("{side} child at depth {depth} links to a different parent")]
    ForeignParent { side: Side, depth: usize },
}

/// Checks that every child in the subtree rooted at `node` points back at the node that
/// owns it.
///
/// The root's own back-reference is not inspected, since its parent, if any, lies outside
/// the subtree. The first mismatch found in pre-order is reported.
pub fn check_links<T>(node: Option<&BNode<T>>) -> Result<(), BNodeError> {
    match node {
        None => Ok(()),
        Some(node) => check_children(node, 1),
    }
}

fn check_children<T>(node: &BNode<T>, depth: usize) -> Result<(), BNodeError> {
    for (side, child) in [(Side::Left, node.left()), (Side::Right, node.right())] {
        let Some(child) = child else {
            continue;
        };
        if child.parent().is_none() {
            return Err(BNodeError::DetachedChild { side, depth });
        }
        if !child.is_child_of(node) {
            return Err(BNodeError::ForeignParent { side, depth });
        }
        check_children(child, depth + 1)?;
    }
    Ok(())
}
