//! An in-memory, generic, ordered associative container implemented as a
//! B-tree.
//!
//! [`Tree`] is a mutable sorted set of user-defined items, ordered by a
//! [`Less`] comparator supplied once at construction rather than by the
//! item's own [`Ord`] impl (though [`OrdLess`] gets you that for free).
//! Inserting an item equivalent to one already stored replaces it and
//! hands back the old value.
//!
//! The interesting part is [`Tree::clone`]: cloning is O(1) because the
//! clone and the original start out sharing every node. Internally each
//! node is tagged with an epoch; any write that would touch a node tagged
//! with a stale epoch duplicates it first (copy-on-write), so the two
//! trees can diverge freely afterwards without either observing the
//! other's mutations. See the `node` module for the mechanics.
//!
//! This crate has no I/O and no persistence. A single tree is for
//! single-writer use; see [`FreeList`] for the one piece of state a
//! clone family shares, which must stay single-threaded unless each
//! clone is given its own.

mod epoch;
mod error;
mod free_list;
mod item;
mod node;
mod tree;

pub use error::BTreeError;
pub use free_list::{FreeList, DEFAULT_FREE_LIST_CAPACITY};
pub use item::{Less, OrdLess};
pub use tree::{Tree, DEFAULT_DEGREE};
