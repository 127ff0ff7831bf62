//! End markers that aren't positions.
//!
//! A [`Sentinel`] stands in for the end of a sequence whose true end position is unknown or expensive,
//! like that of a predicate-terminated or infinite sequence.
//! Cursors opt into comparing against it through [`SentinelEq`].
//!
//! The traits in this module describe what adaptors can do with whichever end type their input has:
//! recognise it ([`EndMarker`]), measure it ([`SizedEnd`]), turn it into a position ([`Terminal`])
//! and carry it through a positional wrapper ([`LiftEnd`]).

use core::{cmp::Ordering, ops::Sub};

use crate::{
	cursor::{Cursor, RandomAccessCursor, SentinelDifference, SentinelEq},
	iter::Iter,
};

/// A cheap end marker, optionally carrying a payload that tells the cursor where to stop.
///
/// All sentinels compare equal to each other, regardless of payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sentinel<T = ()>(T);

/// The stateless [`Sentinel`].
pub type DefaultSentinel = Sentinel<()>;

/// The [`DefaultSentinel`] value.
pub const DEFAULT_SENTINEL: DefaultSentinel = Sentinel(());

impl<T> Sentinel<T> {
	/// Creates a new [`Sentinel`] around `payload`.
	pub const fn new(payload: T) -> Self {
		Self(payload)
	}

	/// The payload.
	#[must_use]
	pub const fn payload(&self) -> &T {
		&self.0
	}

	/// Unwraps the payload.
	#[must_use]
	pub fn into_payload(self) -> T {
		self.0
	}
}

impl<T, U> PartialEq<Sentinel<U>> for Sentinel<T> {
	fn eq(&self, _: &Sentinel<U>) -> bool {
		true
	}
}
impl<T> Eq for Sentinel<T> {}

impl<T, U> PartialOrd<Sentinel<U>> for Sentinel<T> {
	fn partial_cmp(&self, _: &Sentinel<U>) -> Option<Ordering> {
		Some(Ordering::Equal)
	}
}

impl<C: SentinelEq<T>, T> PartialEq<Sentinel<T>> for Iter<C> {
	fn eq(&self, sentinel: &Sentinel<T>) -> bool {
		self.cursor().eq_sentinel(sentinel)
	}
}

impl<C: SentinelEq<T>, T> PartialEq<Iter<C>> for Sentinel<T> {
	fn eq(&self, iter: &Iter<C>) -> bool {
		iter.cursor().eq_sentinel(self)
	}
}

impl<C: SentinelDifference<T>, T> PartialOrd<Sentinel<T>> for Iter<C> {
	fn partial_cmp(&self, sentinel: &Sentinel<T>) -> Option<Ordering> {
		Some(self.cursor().difference_sentinel(sentinel).cmp(&0))
	}
}

impl<C: SentinelDifference<T>, T> PartialOrd<Iter<C>> for Sentinel<T> {
	fn partial_cmp(&self, iter: &Iter<C>) -> Option<Ordering> {
		<Iter<C> as PartialOrd<Self>>::partial_cmp(iter, self).map(Ordering::reverse)
	}
}

impl<C: SentinelDifference<T>, T> Sub<Sentinel<T>> for Iter<C> {
	type Output = isize;

	fn sub(self, sentinel: Sentinel<T>) -> isize {
		self.cursor().difference_sentinel(&sentinel)
	}
}

impl<C: SentinelDifference<T>, T> Sub<Iter<C>> for Sentinel<T> {
	type Output = isize;

	fn sub(self, iter: Iter<C>) -> isize {
		-(iter - self)
	}
}

/// Anything that can be returned from [`Iterable::end`](`crate::Iterable::end`) for cursors of type `C`.
pub trait EndMarker<C: Cursor>: Clone {
	/// Whether this is a [`Sentinel`] rather than an [`Iter<C>`].
	const IS_SENTINEL: bool;

	/// Whether `cursor` is at this end.
	fn is_reached_by(&self, cursor: &C) -> bool;
}

impl<C: Cursor> EndMarker<C> for Iter<C> {
	const IS_SENTINEL: bool = false;

	fn is_reached_by(&self, cursor: &C) -> bool {
		cursor.eq(self.cursor())
	}
}

impl<C: SentinelEq<T>, T: Clone> EndMarker<C> for Sentinel<T> {
	const IS_SENTINEL: bool = true;

	fn is_reached_by(&self, cursor: &C) -> bool {
		cursor.eq_sentinel(self)
	}
}

/// An [`EndMarker`] whose distance from a cursor can be measured in constant time.
pub trait SizedEnd<C: RandomAccessCursor>: EndMarker<C> {
	/// `self - cursor`, in steps.
	fn distance_from(&self, cursor: &C) -> isize;
}

impl<C: RandomAccessCursor> SizedEnd<C> for Iter<C> {
	fn distance_from(&self, cursor: &C) -> isize {
		self.cursor().difference(cursor)
	}
}

impl<C: SentinelDifference<T>, T: Clone> SizedEnd<C> for Sentinel<T> {
	fn distance_from(&self, cursor: &C) -> isize {
		-cursor.difference_sentinel(self)
	}
}

/// An [`EndMarker`] that can be turned into a real end position.
///
/// Real end iterators are trivially terminal. Sentinels are terminal if the cursor can measure its way there.
pub trait Terminal<C: Cursor>: EndMarker<C> {
	/// Produces the end position of the sequence starting at `begin`.
	fn materialize(&self, begin: &C) -> C;
}

impl<C: Cursor> Terminal<C> for Iter<C> {
	fn materialize(&self, _: &C) -> C {
		self.cursor().clone()
	}
}

impl<C: SentinelDifference<T>, T: Clone> Terminal<C> for Sentinel<T> {
	fn materialize(&self, begin: &C) -> C {
		let mut end = begin.clone();
		end.plus_is(-begin.difference_sentinel(self));
		end
	}
}

/// Carries an end marker for cursors `C` through a wrapper cursor `D`.
///
/// A real end position is wrapped like any other position, so the derived sequence stays symmetric.
/// A [`Sentinel`] is passed through unchanged, which requires `D` to understand it.
pub trait LiftEnd<C: Cursor, D: Cursor>: EndMarker<C> {
	/// The end marker for `D`.
	type Output: EndMarker<D>;

	/// Wraps this end marker. `wrap` is only called for real end positions.
	fn lift(self, wrap: impl FnOnce(C) -> D) -> Self::Output;
}

impl<C: Cursor, D: Cursor> LiftEnd<C, D> for Iter<C> {
	type Output = Iter<D>;

	fn lift(self, wrap: impl FnOnce(C) -> D) -> Iter<D> {
		Iter::new(wrap(self.into_cursor()))
	}
}

impl<C: SentinelEq<T>, D: SentinelEq<T>, T: Clone> LiftEnd<C, D> for Sentinel<T> {
	type Output = Self;

	fn lift(self, _: impl FnOnce(C) -> D) -> Self {
		self
	}
}
