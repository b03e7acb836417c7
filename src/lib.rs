//! # bnode
//!
//! Bare binary-tree nodes and the structural operations needed to build a tree type on
//! top of them. A [`BNode`] owns its children through [`Link`]s and keeps a non-owning
//! back-reference to its parent for upward navigation.
//!
//! Nothing here knows about ordering, balancing or search: a binary search tree, an
//! expression tree or a heap is expected to hold a root [`Link`] and implement its own
//! insert/erase/clone/assign semantics with [`add_left`], [`add_right`], [`clear`],
//! [`copy`], [`assign`], [`swap`] and [`size`].

pub mod bnode;

pub use bnode::{
    add_left, add_left_cloned, add_left_value, add_right, add_right_cloned, add_right_value,
    assign, check_links, clear, copy, size, swap, BNode, BNodeError, Link, Side,
};
