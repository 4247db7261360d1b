//! Owner identity shared between a list and the nodes it creates.
//!
//! A list holds the only strong reference to its [`OwnerToken`]; every node it
//! creates stores a [`Weak`] to the same token. Membership is decided by
//! pointer identity of the token, so the back-reference never keeps a list
//! alive and no reference cycle exists between a list and its nodes.
//!
//! The weak reference pins the token's allocation for as long as any node
//! refers to it, so a dropped list's address cannot be handed to a new list
//! while old nodes still point at it.

use std::ptr;
use std::rc::{Rc, Weak};

use crate::error::{ListError, ListResult};
use crate::node::ListNode;
use crate::trace::rejected;

/// Identity object owned by exactly one list.
#[derive(Debug)]
pub(crate) struct OwnerToken {
    _private: (),
}

impl OwnerToken {
    /// Creates a fresh token with a unique address.
    #[must_use]
    pub(crate) fn new_shared() -> Rc<Self> {
        Rc::new(Self { _private: () })
    }
}

/// Returns `true` if `owner` was downgraded from `token`.
#[inline]
#[must_use]
pub(crate) fn is_owned_by(owner: &Weak<OwnerToken>, token: &Rc<OwnerToken>) -> bool {
    ptr::eq(owner.as_ptr(), Rc::as_ptr(token))
}

/// Fails with [`ListError::ForeignNode`] unless `node` is currently linked into
/// the list identified by `token`.
pub(crate) fn ensure_member<T>(
    operation: &'static str,
    token: &Rc<OwnerToken>,
    node: &ListNode<T>,
) -> ListResult<()> {
    if node.is_member_of(token) {
        Ok(())
    } else {
        Err(rejected(operation, ListError::ForeignNode))
    }
}
