//! The iterator base: the full operator set, synthesised from a [`Cursor`].

use core::{
	cmp::Ordering,
	ops::{Add, AddAssign, Sub, SubAssign},
};

use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor};

/// A position in a lazy sequence.
///
/// [`Iter`] wraps a [`Cursor`] and derives the usual iterator operations from its primitives,
/// depending on which cursor traits `C` implements:
///
/// | cursor | operations |
/// |---|---|
/// | [`Cursor`] | [`get`](`Iter::get`), [`inc`](`Iter::inc`), [`post_inc`](`Iter::post_inc`), `==`, `!=` |
/// | [`BidirectionalCursor`] | [`dec`](`Iter::dec`), [`post_dec`](`Iter::post_dec`) |
/// | [`RandomAccessCursor`] | `+`, `+=`, `-`, `-=`, `it - it`, [`at`](`Iter::at`), `<`, `<=`, `>`, `>=` |
///
/// Comparisons and differences against [`Sentinel`](`crate::Sentinel`)s are available in both operand orders.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone, Copy)]
pub struct Iter<C> {
	cursor: C,
}

impl<C> Iter<C> {
	/// Wraps `cursor`.
	pub const fn new(cursor: C) -> Self {
		Self { cursor }
	}

	/// The wrapped cursor.
	#[must_use]
	pub const fn cursor(&self) -> &C {
		&self.cursor
	}

	/// The wrapped cursor, mutably.
	#[must_use]
	pub fn cursor_mut(&mut self) -> &mut C {
		&mut self.cursor
	}

	/// Unwraps the cursor.
	#[must_use]
	pub fn into_cursor(self) -> C {
		self.cursor
	}
}

impl<C: Cursor> Iter<C> {
	/// Reads the current element.
	///
	/// # Panics
	///
	/// Iff the cursor's precondition checks are active and this is an end position.
	#[must_use]
	pub fn get(&self) -> C::Item {
		self.cursor.dereference()
	}

	/// Pre-increment.
	///
	/// # Panics
	///
	/// Iff the cursor's precondition checks are active and this is an end position.
	pub fn inc(&mut self) -> &mut Self {
		self.cursor.increment();
		self
	}

	/// Post-increment: steps forward and returns the previous position.
	///
	/// # Panics
	///
	/// Iff the cursor's precondition checks are active and this is an end position.
	pub fn post_inc(&mut self) -> Self {
		let previous = self.clone();
		self.cursor.increment();
		previous
	}
}

impl<C: BidirectionalCursor> Iter<C> {
	/// Pre-decrement.
	///
	/// # Panics
	///
	/// Iff the cursor's precondition checks are active and this is the first position.
	pub fn dec(&mut self) -> &mut Self {
		self.cursor.decrement();
		self
	}

	/// Post-decrement: steps back and returns the previous position.
	///
	/// # Panics
	///
	/// Iff the cursor's precondition checks are active and this is the first position.
	pub fn post_dec(&mut self) -> Self {
		let previous = self.clone();
		self.cursor.decrement();
		previous
	}
}

impl<C: RandomAccessCursor> Iter<C> {
	/// Reads the element `offset` steps away, like `it[offset]`.
	#[must_use]
	pub fn at(&self, offset: isize) -> C::Item {
		(self.clone() + offset).get()
	}
}

impl<C: Cursor> PartialEq for Iter<C> {
	fn eq(&self, other: &Self) -> bool {
		Cursor::eq(&self.cursor, &other.cursor)
	}
}

impl<C: RandomAccessCursor> PartialOrd for Iter<C> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cursor.difference(&other.cursor).cmp(&0))
	}
}

impl<C: RandomAccessCursor> AddAssign<isize> for Iter<C> {
	fn add_assign(&mut self, offset: isize) {
		self.cursor.plus_is(offset)
	}
}

impl<C: RandomAccessCursor> SubAssign<isize> for Iter<C> {
	fn sub_assign(&mut self, offset: isize) {
		self.cursor.plus_is(-offset)
	}
}

impl<C: RandomAccessCursor> Add<isize> for Iter<C> {
	type Output = Self;

	fn add(mut self, offset: isize) -> Self {
		self += offset;
		self
	}
}

impl<C: RandomAccessCursor> Sub<isize> for Iter<C> {
	type Output = Self;

	fn sub(mut self, offset: isize) -> Self {
		self -= offset;
		self
	}
}

impl<C: RandomAccessCursor> Sub for Iter<C> {
	type Output = isize;

	fn sub(self, other: Self) -> isize {
		self.cursor.difference(&other.cursor)
	}
}

impl<'a, C: RandomAccessCursor> Sub<&'a Iter<C>> for &'a Iter<C> {
	type Output = isize;

	fn sub(self, other: &'a Iter<C>) -> isize {
		self.cursor.difference(&other.cursor)
	}
}
