//! Lock-step traversal of two sequences.

use core::cmp::min;

use crate::{
	category::{Weakest, WeakestOf},
	cursor::{
		BidirectionalCursor, Cursor, RandomAccessCursor, SentinelDifference, SentinelEq,
	},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{EndMarker, Sentinel, SizedEnd},
};

/// Pairs up elements of two sequences, stopping at the shorter one's end.
///
/// The category is the weaker of the two inputs'.
/// The end is a [`Sentinel`] carrying both inner ends, since either may be reached first.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
	a: A,
	b: B,
}

/// The [`Adaptor`] behind [`zip`](`crate::adaptors::zip`), holding the right-hand sequence.
#[derive(Debug, Clone, Copy)]
pub struct ZipAdaptor<B>(pub(crate) B);

impl<I: IntoView, B> Adaptor<I> for ZipAdaptor<B> {
	type Output = Zip<I::View, B>;

	fn call(self, iterable: I) -> Self::Output {
		Zip {
			a: iterable.into_view(),
			b: self.0,
		}
	}
}

/// The cursor of [`Zip`].
#[derive(Debug, Clone)]
pub struct ZipCursor<CA, CB> {
	a: CA,
	b: CB,
}

impl<CA: Cursor, CB: Cursor> Cursor for ZipCursor<CA, CB>
where
	CA::Category: Weakest<CB::Category>,
{
	type Item = (CA::Item, CB::Item);
	type Category = WeakestOf<CA::Category, CB::Category>;

	fn dereference(&self) -> Self::Item {
		(self.a.dereference(), self.b.dereference())
	}

	fn increment(&mut self) {
		self.a.increment();
		self.b.increment();
	}

	fn eq(&self, other: &Self) -> bool {
		self.a.eq(&other.a)
	}
}

impl<CA: BidirectionalCursor, CB: BidirectionalCursor> BidirectionalCursor for ZipCursor<CA, CB>
where
	CA::Category: Weakest<CB::Category>,
{
	fn decrement(&mut self) {
		self.a.decrement();
		self.b.decrement();
	}
}

impl<CA: RandomAccessCursor, CB: RandomAccessCursor> RandomAccessCursor for ZipCursor<CA, CB>
where
	CA::Category: Weakest<CB::Category>,
{
	fn plus_is(&mut self, offset: isize) {
		self.a.plus_is(offset);
		self.b.plus_is(offset);
	}

	fn difference(&self, other: &Self) -> isize {
		// Both halves always move together.
		self.a.difference(&other.a)
	}
}

impl<CA: Cursor, CB: Cursor, EA, EB> SentinelEq<(EA, EB)> for ZipCursor<CA, CB>
where
	CA::Category: Weakest<CB::Category>,
	EA: EndMarker<CA>,
	EB: EndMarker<CB>,
{
	fn eq_sentinel(&self, sentinel: &Sentinel<(EA, EB)>) -> bool {
		let (end_a, end_b) = sentinel.payload();
		end_a.is_reached_by(&self.a) || end_b.is_reached_by(&self.b)
	}
}

impl<CA: RandomAccessCursor, CB: RandomAccessCursor, EA, EB> SentinelDifference<(EA, EB)>
	for ZipCursor<CA, CB>
where
	CA::Category: Weakest<CB::Category>,
	EA: SizedEnd<CA>,
	EB: SizedEnd<CB>,
{
	fn difference_sentinel(&self, sentinel: &Sentinel<(EA, EB)>) -> isize {
		let (end_a, end_b) = sentinel.payload();
		-min(end_a.distance_from(&self.a), end_b.distance_from(&self.b))
	}
}

impl<A: Iterable, B: Iterable> Iterable for Zip<A, B>
where
	<A::Cursor as Cursor>::Category: Weakest<<B::Cursor as Cursor>::Category>,
{
	type Cursor = ZipCursor<A::Cursor, B::Cursor>;
	type End = Sentinel<(A::End, B::End)>;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(ZipCursor {
			a: self.a.begin().into_cursor(),
			b: self.b.begin().into_cursor(),
		})
	}

	fn end(&self) -> Self::End {
		Sentinel::new((self.a.end(), self.b.end()))
	}
}

impl<A: SizedIterable, B: SizedIterable> SizedIterable for Zip<A, B>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		min(self.a.size(), self.b.size())
	}
}

lazy_view!([A, B] Zip<A, B>);
