//! Link cells of a [`SinglyLinkedList`](crate::SinglyLinkedList).
//!
//! A [`ListNode`] is a cheap, cloneable handle to one cell of a list's chain.
//! Handles returned by list operations can be kept around and passed back to
//! the list (`insert_after`, `get_prev`, `remove`) for positional work.
//!
//! # Membership
//!
//! Every node records the list that created it through a weak back-reference
//! and a flag saying whether it is still linked. Once a node is detached
//! (by `remove`, `pop_left`, `pop_right`, `clear`, or the list being dropped)
//! it keeps its last value but loses its successor, and the list rejects it
//! with [`ListError::ForeignNode`](crate::ListError::ForeignNode).
//!
//! # Borrowing
//!
//! Values live in their own [`RefCell`], apart from the link fields. The
//! guards returned by [`ListNode::value`] and [`ListNode::value_mut`] follow
//! the usual `RefCell` rules for the value, but never block structural work:
//! the list can link, unlink and traverse a node while its value is borrowed.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use crate::list::SinglyLinkedList;
use crate::membership::{OwnerToken, is_owned_by};

const BORROWED: &str = "<borrowed>";

struct NodeCell<T> {
    value: RefCell<T>,
    next: RefCell<Option<ListNode<T>>>,
    owner: Weak<OwnerToken>,
    attached: Cell<bool>,
}

/// A handle to a single node of a singly linked list.
///
/// Cloning a `ListNode` clones the handle, not the node: both clones refer to
/// the same cell. Use [`ListNode::ptr_eq`] to compare handles by identity.
///
/// # Examples
///
/// ```rust
/// use sllist::{ListNode, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// let node = list.append_right(1);
/// list.append_right(2);
///
/// *node.value_mut() += 10;
/// assert_eq!(node.get(), 11);
/// assert_eq!(node.next().map(|next| next.get()), Some(2));
///
/// let standalone = ListNode::new("orphan");
/// assert!(!standalone.is_attached());
/// ```
pub struct ListNode<T> {
    cell: Rc<NodeCell<T>>,
}

impl<T> ListNode<T> {
    /// Creates a standalone node that belongs to no list.
    ///
    /// Standalone nodes are useful as value carriers, for instance as the
    /// replacement argument of [`SinglyLinkedList::set`](crate::SinglyLinkedList::set).
    #[must_use]
    pub fn new(value: T) -> Self {
        Self::from_cell(NodeCell {
            value: RefCell::new(value),
            next: RefCell::new(None),
            owner: Weak::new(),
            attached: Cell::new(false),
        })
    }

    /// Creates a node linked in front of `next`, owned by the list behind `owner`.
    #[must_use]
    pub(crate) fn create(value: T, next: Option<Self>, owner: &Rc<OwnerToken>) -> Self {
        Self::from_cell(NodeCell {
            value: RefCell::new(value),
            next: RefCell::new(next),
            owner: Rc::downgrade(owner),
            attached: Cell::new(true),
        })
    }

    fn from_cell(cell: NodeCell<T>) -> Self {
        Self { cell: Rc::new(cell) }
    }

    /// Borrows the stored value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently mutably borrowed.
    pub fn value(&self) -> Ref<'_, T> {
        self.cell.value.borrow()
    }

    /// Mutably borrows the stored value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed.
    pub fn value_mut(&self) -> RefMut<'_, T> {
        self.cell.value.borrow_mut()
    }

    /// Replaces the stored value, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently borrowed.
    pub fn set_value(&self, value: T) -> T {
        mem::replace(&mut *self.cell.value.borrow_mut(), value)
    }

    /// Returns a clone of the stored value.
    ///
    /// This is the short form of `node.value().clone()`.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently mutably borrowed.
    #[must_use]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.cell.value.borrow().clone()
    }

    /// Returns the successor of this node, if any.
    ///
    /// Detached nodes never have a successor. There is no public way to change
    /// the link; splicing goes through the owning list.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.cell.next.borrow().clone()
    }

    /// Returns `true` if both handles refer to the same node.
    #[inline]
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.cell, &other.cell)
    }

    /// Returns `true` while the node is linked into the list that created it.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.cell.attached.get() && self.cell.owner.strong_count() > 0
    }

    /// Returns `true` if the node is currently linked into `list`.
    #[must_use]
    pub fn belongs_to(&self, list: &SinglyLinkedList<T>) -> bool {
        list.contains_node(self)
    }

    pub(crate) fn is_member_of(&self, token: &Rc<OwnerToken>) -> bool {
        self.cell.attached.get() && is_owned_by(&self.cell.owner, token)
    }

    /// Replaces the successor link, returning the previous one.
    pub(crate) fn set_next(&self, next: Option<Self>) -> Option<Self> {
        self.cell.next.replace(next)
    }

    /// Unlinks the node for good and returns its former successor.
    pub(crate) fn detach(&self) -> Option<Self> {
        self.cell.attached.set(false);
        self.cell.next.take()
    }

    /// Writes the value with `write`, or `<borrowed>` while it is mutably borrowed.
    pub(crate) fn write_value<F>(&self, formatter: &mut fmt::Formatter<'_>, write: F) -> fmt::Result
    where
        F: FnOnce(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        match self.cell.value.try_borrow() {
            Ok(value) => write(&*value, formatter),
            Err(_) => formatter.write_str(BORROWED),
        }
    }
}

impl<T> Clone for ListNode<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ListNode(")?;
        self.write_value(formatter, |value, formatter| write!(formatter, "{value:?}"))?;
        formatter.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for ListNode<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_value(formatter, |value, formatter| write!(formatter, "{value}"))
    }
}

static_assertions::assert_not_impl_any!(ListNode<i32>: Send, Sync);
