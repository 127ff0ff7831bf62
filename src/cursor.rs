//! The primitive operations a position type implements.
//!
//! Everything else, like the operator set on [`Iter`](`crate::Iter`) and the sentinel comparisons,
//! is derived from these by static dispatch.
//!
//! Which traits a cursor implements is its *actual* capability,
//! while [`Cursor::Category`] is its *promise*.
//! A cursor must not declare a category it doesn't implement in constant time.

use crate::{category::Category, sentinel::Sentinel};

/// A position in a sequence that can at least move forwards.
pub trait Cursor: Clone {
	/// What [`dereference`](`Cursor::dereference`) produces.
	///
	/// This is often a reference into the underlying storage, but may be a computed value.
	type Item;

	/// The traversal category this cursor promises.
	type Category: Category;

	/// Reads the element at the current position.
	///
	/// # Panics
	///
	/// May panic if the cursor is at the end of its sequence.
	fn dereference(&self) -> Self::Item;

	/// Steps forward by one.
	///
	/// # Panics
	///
	/// May panic if the cursor is at the end of its sequence.
	fn increment(&mut self);

	/// Whether `self` and `other` are the same position.
	///
	/// # Panics
	///
	/// May panic if `self` and `other` don't belong to the same sequence.
	fn eq(&self, other: &Self) -> bool;
}

/// A [`Cursor`] that can also step back.
pub trait BidirectionalCursor: Cursor {
	/// Steps back by one.
	///
	/// # Panics
	///
	/// May panic if the cursor is at the start of its sequence.
	fn decrement(&mut self);
}

/// A [`BidirectionalCursor`] with constant-time offsets.
pub trait RandomAccessCursor: BidirectionalCursor {
	/// Moves by `offset` steps, which may be negative.
	fn plus_is(&mut self, offset: isize);

	/// `self - other`, in steps.
	fn difference(&self, other: &Self) -> isize;
}

/// A [`Cursor`] that can tell whether it reached a [`Sentinel<T>`].
pub trait SentinelEq<T = ()>: Cursor {
	/// Whether this cursor is at the end marked by `sentinel`.
	fn eq_sentinel(&self, sentinel: &Sentinel<T>) -> bool;
}

/// A [`RandomAccessCursor`] that can measure its distance to a [`Sentinel<T>`] in constant time.
pub trait SentinelDifference<T = ()>: SentinelEq<T> + RandomAccessCursor {
	/// `self - sentinel`, in steps. This is zero or negative for valid positions.
	fn difference_sentinel(&self, sentinel: &Sentinel<T>) -> isize;
}

/// `a - b` for two indices, saturating at the [`isize`] bounds.
pub(crate) fn signed_difference(a: usize, b: usize) -> isize {
	if a >= b {
		isize::try_from(a - b).unwrap_or(isize::MAX)
	} else {
		isize::try_from(b - a).map_or(isize::MIN, |d| -d)
	}
}

/// Applies a signed `offset` to `index`, or [`None`] if the result would leave [`usize`].
pub(crate) fn offset_index(index: usize, offset: isize) -> Option<usize> {
	index.checked_add_signed(offset)
}
