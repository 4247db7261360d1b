//! Error types for list operations.
//!
//! Every fallible operation on [`SinglyLinkedList`](crate::SinglyLinkedList)
//! returns a [`ListResult`]. A failed operation never leaves the list in a
//! partially updated state: `first`, `last` and the size are either all
//! updated or all untouched.

use thiserror::Error;

/// Result alias used by list operations.
pub type ListResult<T> = Result<T, ListError>;

/// Errors reported by [`SinglyLinkedList`](crate::SinglyLinkedList).
///
/// All of these describe misuse by the caller rather than transient failures,
/// so retrying the same call will fail the same way.
///
/// # Examples
///
/// ```rust
/// use sllist::{ListError, SinglyLinkedList};
///
/// let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
/// assert_eq!(list.pop_left().unwrap_err(), ListError::EmptyList);
/// assert_eq!(ListError::EmptyList.to_string(), "list is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one element.
    #[error("list is empty")]
    EmptyList,

    /// `get_prev` was asked for the predecessor of the first node.
    #[error("no previous element")]
    NoPredecessor,

    /// The node is not linked into this list.
    ///
    /// Raised for nodes created by another list, nodes that were already
    /// detached, and standalone nodes built with
    /// [`ListNode::new`](crate::ListNode::new).
    #[error("node belongs to another list")]
    ForeignNode,

    /// A positional access fell outside `0..size`.
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The list size at the time of the call.
        size: usize,
    },

    /// A sequence reported a length but failed to produce one of its elements.
    #[error("failed to get element {index} from sequence")]
    InvalidSequence {
        /// The position the sequence could not produce.
        index: usize,
    },
}

impl ListError {
    #[must_use]
    pub(crate) const fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Returns `true` for errors caused by calling an operation on an empty list.
    #[must_use]
    pub const fn is_empty_list(&self) -> bool {
        matches!(self, Self::EmptyList)
    }

    /// Returns `true` for errors about a node's relation to the list.
    #[must_use]
    pub const fn is_membership_error(&self) -> bool {
        matches!(self, Self::ForeignNode | Self::NoPredecessor)
    }
}
