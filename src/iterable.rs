//! The begin/end protocol every sequence exposes, and its bridge to [`Iterator`].

use core::iter::FusedIterator;

use crate::{
	category::{Category, CategoryKind},
	cursor::{BidirectionalCursor, Cursor},
	iter::Iter,
	sentinel::EndMarker,
};

/// A sequence that can hand out a begin position and an end marker.
///
/// `begin()` may be called any number of times. The resulting cursors are independent.
pub trait Iterable {
	/// The position type.
	type Cursor: Cursor;

	/// The end marker, either [`Iter<Self::Cursor>`] or a [`Sentinel`](`crate::Sentinel`).
	type End: EndMarker<Self::Cursor>;

	/// The first position.
	fn begin(&self) -> Iter<Self::Cursor>;

	/// The end of the sequence.
	fn end(&self) -> Self::End;

	/// Consumes `self`, handing out both ends at once.
	///
	/// Sequences that own their state may move it into the cursors here instead of cloning.
	fn into_bounds(self) -> (Iter<Self::Cursor>, Self::End)
	where
		Self: Sized,
	{
		(self.begin(), self.end())
	}

	/// A standard [`Iterator`] over this sequence.
	fn walk(&self) -> Walk<Self::Cursor, Self::End> {
		Walk::new(self.begin(), self.end())
	}
}

/// An [`Iterable`] that knows its length without traversal.
pub trait SizedIterable: Iterable {
	/// The number of elements.
	fn size(&self) -> usize;
}

/// Whether `iterable`'s begin and end have distinct types.
#[must_use]
pub fn is_sentineled<I: Iterable + ?Sized>(_: &I) -> bool {
	<I::End as EndMarker<I::Cursor>>::IS_SENTINEL
}

/// The traversal category `iterable`'s cursors promise.
#[must_use]
pub fn category_of<I: Iterable + ?Sized>(_: &I) -> CategoryKind {
	<<I::Cursor as Cursor>::Category as Category>::KIND
}

/// An [`Iterator`] running a cursor up to an end marker.
///
/// If the end is a real bidirectional position, this is also a [`DoubleEndedIterator`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Walk<C, E> {
	front: Iter<C>,
	back: E,
}

impl<C, E> Walk<C, E> {
	/// Walks from `front` to `back`.
	pub const fn new(front: Iter<C>, back: E) -> Self {
		Self { front, back }
	}

	/// Splits this [`Walk`] back into its current bounds.
	#[must_use]
	pub fn into_bounds(self) -> (Iter<C>, E) {
		(self.front, self.back)
	}
}

impl<C: Cursor, E: EndMarker<C>> Iterator for Walk<C, E> {
	type Item = C::Item;

	fn next(&mut self) -> Option<Self::Item> {
		if self.back.is_reached_by(self.front.cursor()) {
			None
		} else {
			let item = self.front.get();
			self.front.inc();
			Some(item)
		}
	}
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Walk<C, Iter<C>> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.front == self.back {
			None
		} else {
			Some(self.back.dec().get())
		}
	}
}

impl<C: Cursor, E: EndMarker<C>> FusedIterator for Walk<C, E> {}
