//! Singly linked list with first-class node handles.
//!
//! This module provides [`SinglyLinkedList`], a mutable singly linked list
//! whose operations hand out [`ListNode`] handles. A handle can later be passed
//! back to the list to insert after it, find its predecessor, or remove it.
//!
//! # Overview
//!
//! - O(1) `append_left`, `append_right`, `insert_after`, `pop_left`
//! - O(n) `get_prev`, `remove`, `pop_right` (predecessors are found by scanning
//!   from the first node; only forward links are stored)
//! - O(n) positional `get` and `set`
//!
//! # Examples
//!
//! ```rust
//! use sllist::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::from_sequence(&[1, 2, 4]).unwrap();
//! let two = list.get(1).unwrap();
//! list.insert_after(3, Some(&two)).unwrap();
//! assert_eq!(list.to_string(), "SinglyLinkedList([1, 2, 3, 4])");
//!
//! list.remove(&two).unwrap();
//! assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 3, 4]);
//! assert!(!two.is_attached());
//! ```
//!
//! # Chain Layout
//!
//! ```text
//! first ──▶ [a] ──▶ [b] ──▶ [c] ──▶ None
//!                            ▲
//! last ──────────────────────┘
//! ```
//!
//! The list owns the chain through the `next` links. Each node also keeps a
//! weak back-reference to its list, used only to check membership.

use std::fmt;
use std::rc::Rc;

use crate::error::{ListError, ListResult};
use crate::iter::{NodeIterator, SinglyLinkedListIntoIterator, SinglyLinkedListIterator};
use crate::membership::{OwnerToken, ensure_member};
use crate::node::ListNode;
use crate::sequence::Sequence;
use crate::trace::{list_trace, rejected};

const TYPE_NAME: &str = "SinglyLinkedList";

/// A mutable singly linked list whose nodes are exposed as handles.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `append_left`   | O(1)       |
/// | `append_right`  | O(1)       |
/// | `insert_after`  | O(1)       |
/// | `pop_left`      | O(1)       |
/// | `pop_right`     | O(n)       |
/// | `get_prev`      | O(n)       |
/// | `remove`        | O(n)       |
/// | `get` / `set`   | O(n)       |
/// | `len`           | O(1)       |
///
/// # Examples
///
/// ```rust
/// use sllist::{ListError, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// let b = list.append_right('b');
/// list.append_left('a');
/// list.append_right('c');
///
/// assert_eq!(list.get_prev(&b).unwrap().get(), 'a');
/// assert_eq!(
///     list.get_prev(list.first().unwrap()).unwrap_err(),
///     ListError::NoPredecessor
/// );
/// ```
pub struct SinglyLinkedList<T> {
    first: Option<ListNode<T>>,
    last: Option<ListNode<T>>,
    size: usize,
    token: Rc<OwnerToken>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            size: 0,
            token: OwnerToken::new_shared(),
        }
    }

    /// Creates a list holding the elements of `sequence` in order.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidSequence`] if the sequence fails to produce
    /// an element below its reported length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sllist::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from_sequence(&vec!["x", "y"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_sequence<S>(sequence: &S) -> ListResult<Self>
    where
        S: Sequence<T> + ?Sized,
    {
        let mut list = Self::new();
        list.extend_from_sequence(sequence)?;
        Ok(list)
    }

    /// Appends every element of `sequence` at the end of the list.
    ///
    /// All elements are fetched before anything is linked, so a failing
    /// sequence leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidSequence`] if the sequence fails to produce
    /// an element below its reported length.
    pub fn extend_from_sequence<S>(&mut self, sequence: &S) -> ListResult<()>
    where
        S: Sequence<T> + ?Sized,
    {
        let elements = sequence.items().map_err(|index| {
            rejected("extend_from_sequence", ListError::InvalidSequence { index })
        })?;

        for element in elements {
            self.append_right(element);
        }
        Ok(())
    }

    /// Returns the number of nodes in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the first node, if any.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> Option<&ListNode<T>> {
        self.first.as_ref()
    }

    /// Returns the last node, if any.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> Option<&ListNode<T>> {
        self.last.as_ref()
    }

    /// Returns `true` if `node` is currently linked into this list.
    #[must_use]
    pub fn contains_node(&self, node: &ListNode<T>) -> bool {
        node.is_member_of(&self.token)
    }

    /// Inserts `value` at the front and returns its node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sllist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append_left(2);
    /// list.append_left(1);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn append_left(&mut self, value: T) -> ListNode<T> {
        let node = ListNode::create(value, self.first.take(), &self.token);
        if self.last.is_none() {
            self.last = Some(node.clone());
        }
        self.first = Some(node.clone());
        self.size += 1;
        list_trace!(size = self.size, "append_left");
        node
    }

    /// Inserts `value` at the back and returns its node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sllist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.append_right(1);
    /// let node = list.append_right(2);
    /// assert!(sllist::ListNode::ptr_eq(list.last().unwrap(), &node));
    /// ```
    pub fn append_right(&mut self, value: T) -> ListNode<T> {
        let node = ListNode::create(value, None, &self.token);
        match &self.last {
            Some(last) => {
                last.set_next(Some(node.clone()));
            }
            None => self.first = Some(node.clone()),
        }
        self.last = Some(node.clone());
        self.size += 1;
        list_trace!(size = self.size, "append_right");
        node
    }

    /// Inserts `value` at the back. Same as [`append_right`](Self::append_right).
    #[inline]
    pub fn append(&mut self, value: T) -> ListNode<T> {
        self.append_right(value)
    }

    /// Inserts `value` right after `before` and returns its node.
    ///
    /// Passing `None` inserts at the very front of the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ForeignNode`] if `before` is not linked into this
    /// list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sllist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from_sequence(&['b', 'c']).unwrap();
    /// list.insert_after('a', None).unwrap();
    /// let b = list.get(1).unwrap();
    /// list.insert_after('x', Some(&b)).unwrap();
    /// assert_eq!(list.iter().collect::<String>(), "abxc");
    /// ```
    pub fn insert_after(&mut self, value: T, before: Option<&ListNode<T>>) -> ListResult<ListNode<T>> {
        let Some(before) = before else {
            return Ok(self.append_left(value));
        };
        ensure_member("insert_after", &self.token, before)?;

        if self.is_last(before) {
            return Ok(self.append_right(value));
        }

        let node = ListNode::create(value, before.next(), &self.token);
        before.set_next(Some(node.clone()));
        self.size += 1;
        list_trace!(size = self.size, "insert_after");
        Ok(node)
    }

    /// Returns the node preceding `node`, scanning from the front.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] if the list is empty
    /// - [`ListError::NoPredecessor`] if `node` is the first node
    /// - [`ListError::ForeignNode`] if `node` is not in the chain
    pub fn get_prev(&self, node: &ListNode<T>) -> ListResult<ListNode<T>> {
        let first = self
            .first
            .as_ref()
            .ok_or_else(|| rejected("get_prev", ListError::EmptyList))?;

        if ListNode::ptr_eq(first, node) {
            return Err(rejected("get_prev", ListError::NoPredecessor));
        }

        let mut previous = first.clone();
        while let Some(current) = previous.next() {
            if ListNode::ptr_eq(&current, node) {
                return Ok(previous);
            }
            previous = current;
        }
        Err(rejected("get_prev", ListError::ForeignNode))
    }

    /// Unlinks the first node and returns it detached.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn pop_left(&mut self) -> ListResult<ListNode<T>> {
        let removed = self
            .first
            .take()
            .ok_or_else(|| rejected("pop_left", ListError::EmptyList))?;

        self.first = removed.detach();
        if self.first.is_none() {
            self.last = None;
        }
        self.size -= 1;
        list_trace!(size = self.size, "pop_left");
        Ok(removed)
    }

    /// Unlinks the first node. Same as [`pop_left`](Self::pop_left).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    #[inline]
    pub fn pop(&mut self) -> ListResult<ListNode<T>> {
        self.pop_left()
    }

    /// Unlinks the last node and returns it detached.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list is empty.
    pub fn pop_right(&mut self) -> ListResult<ListNode<T>> {
        let removed = self
            .last
            .clone()
            .ok_or_else(|| rejected("pop_right", ListError::EmptyList))?;

        // A single node has no predecessor; get_prev would refuse it.
        let previous = if self.size == 1 {
            None
        } else {
            Some(self.get_prev(&removed)?)
        };

        removed.detach();
        match previous {
            Some(previous) => {
                previous.set_next(None);
                self.last = Some(previous);
            }
            None => {
                self.first = None;
                self.last = None;
            }
        }
        self.size -= 1;
        list_trace!(size = self.size, "pop_right");
        Ok(removed)
    }

    /// Unlinks `node` from the list.
    ///
    /// Afterwards `node` is detached: it keeps its value but has no successor
    /// and is rejected by every membership-dependent operation.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] if the list is empty
    /// - [`ListError::ForeignNode`] if `node` is not linked into this list
    pub fn remove(&mut self, node: &ListNode<T>) -> ListResult<()> {
        if self.first.is_none() {
            return Err(rejected("remove", ListError::EmptyList));
        }
        ensure_member("remove", &self.token, node)?;

        let previous = if self.is_first(node) {
            None
        } else {
            Some(self.get_prev(node)?)
        };
        let was_last = self.is_last(node);

        let successor = node.detach();
        match previous {
            Some(previous) => {
                if was_last {
                    self.last = Some(previous.clone());
                }
                previous.set_next(successor);
            }
            None => {
                if successor.is_none() {
                    self.last = None;
                }
                self.first = successor;
            }
        }
        self.size -= 1;
        list_trace!(size = self.size, "remove");
        Ok(())
    }

    /// Returns the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> ListResult<ListNode<T>> {
        self.node_at("get", index)
    }

    /// Copies the value of `replacement` into the node at `index`.
    ///
    /// `replacement` itself is left untouched and does not need to belong to
    /// any list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sllist::{ListNode, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::from_sequence(&[1, 2, 3]).unwrap();
    /// list.set(1, &ListNode::new(20)).unwrap();
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 20, 3]);
    /// ```
    pub fn set(&mut self, index: usize, replacement: &ListNode<T>) -> ListResult<()>
    where
        T: Clone,
    {
        let target = self.node_at("set", index)?;
        target.set_value(replacement.get());
        Ok(())
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_value(&mut self, index: usize, value: T) -> ListResult<T> {
        let target = self.node_at("set_value", index)?;
        Ok(target.set_value(value))
    }

    /// Detaches every node, leaving the list empty.
    ///
    /// Outstanding handles keep their values.
    pub fn clear(&mut self) {
        let mut cursor = self.first.take();
        self.last = None;
        self.size = 0;
        while let Some(node) = cursor {
            cursor = node.detach();
        }
        list_trace!("clear");
    }

    /// Returns an iterator over clones of the values, front to back.
    ///
    /// The iterator does not borrow the list; see
    /// [`SinglyLinkedListIterator`] for what happens if the list changes while
    /// it is in use.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SinglyLinkedListIterator<T> {
        SinglyLinkedListIterator::new(self)
    }

    /// Returns an iterator over the node handles, front to back.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> NodeIterator<T> {
        NodeIterator::new(self)
    }

    fn is_first(&self, node: &ListNode<T>) -> bool {
        self.first
            .as_ref()
            .is_some_and(|first| ListNode::ptr_eq(first, node))
    }

    fn is_last(&self, node: &ListNode<T>) -> bool {
        self.last
            .as_ref()
            .is_some_and(|last| ListNode::ptr_eq(last, node))
    }

    fn node_at(&self, operation: &'static str, index: usize) -> ListResult<ListNode<T>> {
        let out_of_range = || rejected(operation, ListError::index_out_of_range(index, self.size));

        if index >= self.size {
            return Err(out_of_range());
        }
        if index == self.size - 1 {
            return self.last.clone().ok_or_else(out_of_range);
        }
        self.nodes().nth(index).ok_or_else(out_of_range)
    }

    fn write_elements<F>(&self, formatter: &mut fmt::Formatter<'_>, mut write_element: F) -> fmt::Result
    where
        F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        if self.is_empty() {
            return write!(formatter, "{TYPE_NAME}()");
        }

        write!(formatter, "{TYPE_NAME}([")?;
        let mut first = true;
        for node in self.nodes() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            node.write_value(formatter, &mut write_element)?;
        }
        write!(formatter, "])")
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SinglyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; a recursive drop of the chain could overflow the stack.
        self.clear();
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append_right(element);
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    /// Copies the values into a new list with its own nodes.
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<T: Clone> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = SinglyLinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SinglyLinkedListIntoIterator::new(self)
    }
}

impl<T: Clone> IntoIterator for &SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = SinglyLinkedListIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Sequence<T> for SinglyLinkedList<T> {
    #[inline]
    fn sequence_len(&self) -> usize {
        self.size
    }

    /// Walks from the front on every call, so prefer [`Sequence::items`] or
    /// [`iter`](SinglyLinkedList::iter) for bulk reads.
    fn item_at(&self, index: usize) -> Option<T> {
        self.nodes().nth(index).map(|node| node.get())
    }

    fn items(&self) -> Result<Vec<T>, usize> {
        Ok(self.iter().collect())
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }
        self.nodes()
            .zip(other.nodes())
            .all(|(left, right)| *left.value() == *right.value())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_elements(formatter, |element, formatter| write!(formatter, "{element:?}"))
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_elements(formatter, |element, formatter| write!(formatter, "{element}"))
    }
}

static_assertions::assert_not_impl_any!(SinglyLinkedList<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
