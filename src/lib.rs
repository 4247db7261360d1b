//! # sllist
//!
//! A singly linked list whose nodes are first-class handles.
//!
//! ## Overview
//!
//! [`SinglyLinkedList`] hands out [`ListNode`] handles from every insertion.
//! Callers can keep those handles and give them back to the list to insert
//! after a known position, find a predecessor, or remove a node, without
//! searching for it by value first.
//!
//! - **Membership**: each node remembers, through a weak back-reference, the
//!   list that created it. Operations that depend on a node's position reject
//!   nodes from other lists and nodes that were already detached.
//! - **Forward links only**: predecessors are recovered by scanning from the
//!   first node.
//! - **Lifetime-free iteration**: iterators hold node handles, not borrows of
//!   the list. Mutating the list during iteration is memory safe but yields an
//!   unspecified sequence.
//! - **Single-threaded**: none of the types are `Send` or `Sync`.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `trace`/`debug` events for list mutations and
//!   rejected operations through the [`tracing`](https://docs.rs/tracing) crate.
//!
//! ## Example
//!
//! ```rust
//! use sllist::prelude::*;
//!
//! let mut list = SinglyLinkedList::from_sequence(&["b", "c"]).unwrap();
//! let a = list.append_left("a");
//! list.insert_after("a2", Some(&a)).unwrap();
//! assert_eq!(format!("{list}"), "SinglyLinkedList([a, a2, b, c])");
//!
//! let removed = list.pop_right().unwrap();
//! assert_eq!(removed.get(), "c");
//! assert_eq!(list.remove(&removed), Err(ListError::ForeignNode));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use sllist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ListError, ListResult};
    pub use crate::iter::{NodeIterator, SinglyLinkedListIterator};
    pub use crate::list::SinglyLinkedList;
    pub use crate::node::ListNode;
    pub use crate::sequence::Sequence;
}

mod error;
mod iter;
mod list;
mod membership;
mod node;
mod sequence;
mod trace;

pub use error::{ListError, ListResult};
pub use iter::{NodeIterator, SinglyLinkedListIntoIterator, SinglyLinkedListIterator};
pub use list::SinglyLinkedList;
pub use node::ListNode;
pub use sequence::Sequence;
