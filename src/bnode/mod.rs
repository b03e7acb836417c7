//! A single node of a binary tree, plus the free functions that manipulate subtrees.
//!
//! *   [`BNode<T>`]: the payload together with two owning child links and a raw parent
//!     back-reference. The node itself knows nothing about the tree it lives in, so it
//!     performs no validation.
//! *   [`Link<T>`]: an owning, possibly empty, handle to a heap-allocated subtree. Roots are
//!     held by the caller in a `Link`; every other node is held by its parent's `left` or
//!     `right` link.
//! *   [`structure`]: size, attach, clear, swap, copy and assign.
//! *   [`validate`]: [`check_links`], which reports parent back-references that disagree
//!     with the actual structure.
//!
//! Nodes only ever exist behind a `Link`. A `Link` keeps the raw pointer it got when the
//! node was allocated, and every parent back-reference is a copy of that same pointer,
//! so moving links around never invalidates a back-reference. The back-reference is
//! never used to free memory.

use std::fmt::{self, Write};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use indenter::indented;

pub mod structure;
pub mod validate;

pub use structure::{
    add_left, add_left_cloned, add_left_value, add_right, add_right_cloned, add_right_value,
    assign, clear, copy, size, swap,
};
pub use validate::{check_links, BNodeError, Side};

/// One vertex of a binary tree.
///
/// Fields are declared children first, so dropping a node tears its subtree down
/// post-order: left, right, then the payload.
pub struct BNode<T> {
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) parent: Option<NonNull<BNode<T>>>,
    // The pointer this node was allocated under. Children copy it into `parent`.
    pub(crate) this: NonNull<BNode<T>>,
    pub data: T,
}

impl<T> BNode<T> {
    fn alloc(data: T) -> NonNull<Self> {
        let node = Box::new(BNode {
            left: Link::empty(),
            right: Link::empty(),
            parent: None,
            this: NonNull::dangling(),
            data,
        });
        let ptr = NonNull::from(Box::leak(node));
        // SAFETY: `ptr` was just leaked from a live box and nothing else refers to it.
        unsafe { (*ptr.as_ptr()).this = ptr };
        ptr
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.get()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.get()
    }

    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.get_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.get_mut()
    }

    /// The owning slot of the left child.
    ///
    /// Writing through it does not touch parent back-references; use it to point
    /// [`clear`], [`swap`] or [`assign`] at a child position.
    pub fn left_link_mut(&mut self) -> &mut Link<T> {
        &mut self.left
    }

    /// The owning slot of the right child. See [`BNode::left_link_mut`].
    pub fn right_link_mut(&mut self) -> &mut Link<T> {
        &mut self.right
    }

    /// The raw parent back-reference, `None` for a root or a detached node.
    pub fn parent(&self) -> Option<NonNull<Self>> {
        self.parent
    }

    /// Follows the parent back-reference.
    ///
    /// # Safety
    ///
    /// The parent must not have been freed since this node was attached to it, and no
    /// mutable reference to the parent may be used while the returned one is alive.
    pub unsafe fn parent_ref(&self) -> Option<&Self> {
        self.parent.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// Whether this node's back-reference names `candidate`. Compares addresses only.
    pub fn is_child_of(&self, candidate: &Self) -> bool {
        self.parent == Some(candidate.this)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// An owning, possibly empty, handle to a subtree.
///
/// Dropping a non-empty link frees the whole subtree. Cloning deep-copies it with
/// [`copy`]; `clone_from` goes through [`assign`] and reuses the nodes already there.
pub struct Link<T> {
    ptr: Option<NonNull<BNode<T>>>,
    _owns: PhantomData<Box<BNode<T>>>,
}

impl<T> Link<T> {
    /// The empty slot.
    pub const fn empty() -> Self {
        Link {
            ptr: None,
            _owns: PhantomData,
        }
    }

    /// A slot holding a fresh, detached leaf with `data`.
    pub fn new(data: T) -> Self {
        Link {
            ptr: Some(BNode::alloc(data)),
            _owns: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_none()
    }

    pub fn get(&self) -> Option<&BNode<T>> {
        // SAFETY: a non-empty link exclusively owns a live node, and `&self` keeps it alive.
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    pub fn get_mut(&mut self) -> Option<&mut BNode<T>> {
        // SAFETY: as in `get`, and `&mut self` makes the access exclusive.
        self.ptr.map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// Moves the subtree out, leaving this slot empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Takes the root node back into a box so it can be freed.
    pub(crate) fn take_node(&mut self) -> Option<Box<BNode<T>>> {
        // SAFETY: the pointer came from `Box::leak` in `BNode::alloc` and this link was
        // its only owner.
        self.ptr
            .take()
            .map(|ptr| unsafe { Box::from_raw(ptr.as_ptr()) })
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        drop(self.take_node());
    }
}

impl<T> Default for Link<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Link<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Clone> Clone for Link<T> {
    fn clone(&self) -> Self {
        copy(self.get())
    }

    fn clone_from(&mut self, source: &Self) {
        assign(self, source.get());
    }
}

impl<T: fmt::Debug> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for BNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BNode")
            .field("data", &self.data)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Renders the subtree with one node per line, children tagged `L:`/`R:` and indented
/// two spaces per level.
impl<T: fmt::Display> fmt::Display for BNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)?;
        for (side, child) in [(Side::Left, self.left()), (Side::Right, self.right())] {
            if let Some(child) = child {
                write!(indented(f).with_str("  "), "\n{}: {}", side.tag(), child)?;
            }
        }
        Ok(())
    }
}
