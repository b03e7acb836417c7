//! Structural operations on subtrees.
//!
//! All of these recurse along the tree height; callers that build degenerate trees are
//! responsible for bounding their depth.

use std::mem;
use std::ptr::NonNull;

use tracing::trace;

use super::{BNode, Link};

/// Number of nodes in the subtree rooted at `node`, `node` included.
pub fn size<T>(node: Option<&BNode<T>>) -> usize {
    match node {
        None => 0,
        Some(node) => size(node.left()) + 1 + size(node.right()),
    }
}

/// Puts `child` into `slot`, pointing its back-reference at `parent`.
///
/// The previous occupant is handed back detached: its back-reference is cleared and it is
/// not freed here.
fn attach<T>(parent: NonNull<BNode<T>>, slot: &mut Link<T>, mut child: Link<T>) -> Link<T> {
    if let Some(child) = child.get_mut() {
        child.parent = Some(parent);
    }
    let mut displaced = mem::replace(slot, child);
    if let Some(old) = displaced.get_mut() {
        old.parent = None;
    }
    displaced
}

/// Attaches `child` as the left child of `parent` and returns whatever was there before.
///
/// `child` may be empty, which simply empties the slot.
#[must_use = "the displaced child subtree is dropped if ignored"]
pub fn add_left<T>(parent: &mut BNode<T>, child: Link<T>) -> Link<T> {
    attach(parent.this, &mut parent.left, child)
}

/// Attaches `child` as the right child of `parent` and returns whatever was there before.
#[must_use = "the displaced child subtree is dropped if ignored"]
pub fn add_right<T>(parent: &mut BNode<T>, child: Link<T>) -> Link<T> {
    attach(parent.this, &mut parent.right, child)
}

/// Moves `data` into a fresh node and attaches it on the left.
#[must_use = "the displaced child subtree is dropped if ignored"]
pub fn add_left_value<T>(parent: &mut BNode<T>, data: T) -> Link<T> {
    add_left(parent, Link::new(data))
}

/// Moves `data` into a fresh node and attaches it on the right.
#[must_use = "the displaced child subtree is dropped if ignored"]
pub fn add_right_value<T>(parent: &mut BNode<T>, data: T) -> Link<T> {
    add_right(parent, Link::new(data))
}

/// Clones `data` into a fresh node and attaches it on the left.
#[must_use = "the displaced child subtree is dropped if ignored"]
pub fn add_left_cloned<T: Clone>(parent: &mut BNode<T>, data: &T) -> Link<T> {
    add_left_value(parent, data.clone())
}

/// Clones `data` into a fresh node and attaches it on the right.
#[must_use = "the displaced child subtree is dropped if ignored"]
pub fn add_right_cloned<T: Clone>(parent: &mut BNode<T>, data: &T) -> Link<T> {
    add_right_value(parent, data.clone())
}

/// Frees the whole subtree in `slot`, children before parents, and leaves `slot` empty.
///
/// An empty slot is left alone. Only `slot` is written, so it can be a child slot of a
/// live node (see [`BNode::left_link_mut`]).
pub fn clear<T>(slot: &mut Link<T>) {
    let freed = clear_nodes(slot);
    if freed > 0 {
        trace!(freed, "cleared subtree");
    }
}

fn clear_nodes<T>(slot: &mut Link<T>) -> usize {
    let Some(mut node) = slot.take_node() else {
        return 0;
    };
    let left = clear_nodes(&mut node.left);
    let right = clear_nodes(&mut node.right);
    drop(node);
    left + 1 + right
}

/// Exchanges the subtrees held by two slots.
///
/// Nothing inside either subtree is touched: in particular the two roots keep their
/// parent back-references, which callers swapping child slots must fix up themselves.
pub fn swap<T>(lhs: &mut Link<T>, rhs: &mut Link<T>) {
    mem::swap(lhs, rhs);
}

/// Deep-clones the subtree rooted at `source` into freshly allocated nodes.
pub fn copy<T: Clone>(source: Option<&BNode<T>>) -> Link<T> {
    let Some(source) = source else {
        return Link::empty();
    };
    let mut copied = Link::new(source.data.clone());
    if let Some(node) = copied.get_mut() {
        // Both slots of a fresh node are empty.
        let _ = add_left(node, copy(source.left()));
        let _ = add_right(node, copy(source.right()));
    }
    copied
}

/// Makes the subtree in `dest` a deep copy of `source`, reusing the nodes of `dest`.
///
/// Wherever both trees have a node at the same position the destination node is kept
/// and only its payload is overwritten (through [`Clone::clone_from`]). Destination
/// nodes with no counterpart are freed, and source nodes with no counterpart are
/// copied in.
pub fn assign<T: Clone>(dest: &mut Link<T>, source: Option<&BNode<T>>) {
    let Some(source) = source else {
        if !dest.is_empty() {
            trace!("assign from empty source, clearing destination");
        }
        clear(dest);
        return;
    };

    if let Some(node) = dest.get_mut() {
        node.data.clone_from(&source.data);
        assign(&mut node.left, source.left());
        assign(&mut node.right, source.right());
        adopt_children(node);
    } else {
        trace!("assign into empty destination, copying");
        *dest = copy(Some(source));
    }
}

/// Points the back-references of both children of `node` at `node`.
fn adopt_children<T>(node: &mut BNode<T>) {
    let parent = node.this;
    for child in [node.left.get_mut(), node.right.get_mut()]
        .into_iter()
        .flatten()
    {
        child.parent = Some(parent);
    }
}
