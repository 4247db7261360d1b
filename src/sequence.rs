//! Sources a list can be built from.
//!
//! [`Sequence`] is the capability required by
//! [`SinglyLinkedList::from_sequence`](crate::SinglyLinkedList::from_sequence):
//! anything that can report its length and hand out the element at a position.

use std::collections::VecDeque;

/// A finite, positionally addressable source of values.
///
/// Implementations must return `Some` for every index below
/// [`sequence_len`](Sequence::sequence_len). A `None` inside that range is
/// reported as [`ListError::InvalidSequence`](crate::ListError::InvalidSequence).
///
/// # Examples
///
/// ```rust
/// use sllist::{Sequence, SinglyLinkedList};
///
/// struct Squares(usize);
///
/// impl Sequence<usize> for Squares {
///     fn sequence_len(&self) -> usize {
///         self.0
///     }
///
///     fn item_at(&self, index: usize) -> Option<usize> {
///         (index < self.0).then(|| index * index)
///     }
/// }
///
/// let list = SinglyLinkedList::from_sequence(&Squares(4)).unwrap();
/// assert_eq!(list.iter().collect::<Vec<_>>(), vec![0, 1, 4, 9]);
/// ```
pub trait Sequence<T> {
    /// Returns the number of elements.
    fn sequence_len(&self) -> usize;

    /// Returns the element at `index`, or `None` if it cannot be produced.
    fn item_at(&self, index: usize) -> Option<T>;

    /// Returns every element in order, or the first index that could not be
    /// produced.
    ///
    /// The default calls [`item_at`](Sequence::item_at) once per position.
    /// Sources with costly positional access override it with a single walk.
    fn items(&self) -> Result<Vec<T>, usize> {
        (0..self.sequence_len())
            .map(|index| self.item_at(index).ok_or(index))
            .collect()
    }
}

impl<T: Clone> Sequence<T> for [T] {
    #[inline]
    fn sequence_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Sequence<T> for [T; N] {
    #[inline]
    fn sequence_len(&self) -> usize {
        N
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Sequence<T> for Vec<T> {
    #[inline]
    fn sequence_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Sequence<T> for VecDeque<T> {
    #[inline]
    fn sequence_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T, S: Sequence<T> + ?Sized> Sequence<T> for &S {
    #[inline]
    fn sequence_len(&self) -> usize {
        (**self).sequence_len()
    }

    #[inline]
    fn item_at(&self, index: usize) -> Option<T> {
        (**self).item_at(index)
    }

    #[inline]
    fn items(&self) -> Result<Vec<T>, usize> {
        (**self).items()
    }
}
