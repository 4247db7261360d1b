//! Cursor-based iterators over a [`SinglyLinkedList`].
//!
//! The iterators hold a node handle rather than a borrow of the list, so the
//! list can still be mutated while an iterator is alive. Doing so is memory
//! safe, but what the iterator yields afterwards is unspecified: it follows
//! whatever `next` links it finds at each step. A node detached under the
//! cursor has no successor, so the iterator simply ends after yielding it.

use std::iter::FusedIterator;

use crate::list::SinglyLinkedList;
use crate::node::ListNode;

/// An iterator over clones of the values of a [`SinglyLinkedList`].
///
/// Created by [`SinglyLinkedList::iter`] or [`SinglyLinkedListIterator::new`].
/// Each iterator is single-pass; ask the list for a new one to restart.
///
/// # Examples
///
/// ```rust
/// use sllist::{SinglyLinkedList, SinglyLinkedListIterator};
///
/// let list: SinglyLinkedList<i32> = (1..=3).collect();
/// let iterator = SinglyLinkedListIterator::new(&list);
/// assert_eq!(iterator.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub struct SinglyLinkedListIterator<T> {
    cursor: Option<ListNode<T>>,
}

impl<T> SinglyLinkedListIterator<T> {
    /// Starts a new traversal at the list's current first node.
    #[must_use]
    pub fn new(list: &SinglyLinkedList<T>) -> Self {
        Self {
            cursor: list.first().cloned(),
        }
    }
}

impl<T: Clone> Iterator for SinglyLinkedListIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.take()?;
        self.cursor = node.next();
        Some(node.get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The chain may change under the cursor, so no upper bound is promised.
        (usize::from(self.cursor.is_some()), None)
    }
}

impl<T: Clone> FusedIterator for SinglyLinkedListIterator<T> {}

/// An iterator over the node handles of a [`SinglyLinkedList`].
///
/// Created by [`SinglyLinkedList::nodes`]. Shares the cursor semantics of
/// [`SinglyLinkedListIterator`].
pub struct NodeIterator<T> {
    cursor: Option<ListNode<T>>,
}

impl<T> NodeIterator<T> {
    /// Starts a new traversal at the list's current first node.
    #[must_use]
    pub fn new(list: &SinglyLinkedList<T>) -> Self {
        Self {
            cursor: list.first().cloned(),
        }
    }
}

impl<T> Iterator for NodeIterator<T> {
    type Item = ListNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.take()?;
        self.cursor = node.next();
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.cursor.is_some()), None)
    }
}

impl<T> FusedIterator for NodeIterator<T> {}

/// An owning iterator over the values of a [`SinglyLinkedList`].
///
/// Values are cloned out of the nodes because outstanding handles may still
/// refer to them.
pub struct SinglyLinkedListIntoIterator<T> {
    list: SinglyLinkedList<T>,
}

impl<T> SinglyLinkedListIntoIterator<T> {
    pub(crate) fn new(list: SinglyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T: Clone> Iterator for SinglyLinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_left().ok().map(|node| node.get())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Clone> ExactSizeIterator for SinglyLinkedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: Clone> FusedIterator for SinglyLinkedListIntoIterator<T> {}

static_assertions::assert_not_impl_any!(SinglyLinkedListIterator<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(NodeIterator<i32>: Send, Sync);
