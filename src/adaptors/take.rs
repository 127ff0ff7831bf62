//! The first `n` elements.

use core::cmp::min;

use crate::{
	algorithm::CategoryOf,
	category::CheapEnd,
	cursor::{
		offset_index, BidirectionalCursor, Cursor, RandomAccessCursor, SentinelDifference,
		SentinelEq,
	},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{EndMarker, Sentinel, SizedEnd},
};

/// Stops after at most `n` elements.
///
/// Random-access inputs with a measurable end get a real end position `min(n, len)` steps in,
/// so the result is symmetric and can be walked from both ends.
/// Otherwise the end is a [`Sentinel`], reached when the count runs out or the input ends.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Take<V> {
	inner: V,
	n: usize,
}

impl<V> Take<V> {
	pub(crate) const fn new(inner: V, n: usize) -> Self {
		Self { inner, n }
	}
}

/// The [`Adaptor`] behind [`take`](`crate::adaptors::take`).
#[derive(Debug, Clone, Copy)]
pub struct TakeAdaptor(pub(crate) usize);

impl<I: IntoView> Adaptor<I> for TakeAdaptor {
	type Output = Take<I::View>;

	fn call(self, iterable: I) -> Self::Output {
		Take::new(iterable.into_view(), self.0)
	}
}

/// The cursor of [`Take`].
#[derive(Debug, Clone)]
pub struct TakeCursor<C, E> {
	inner: C,
	remaining: usize,
	end: E,
}

impl<C: Cursor, E: EndMarker<C>> TakeCursor<C, E> {
	fn at_end(&self) -> bool {
		self.remaining == 0 || self.end.is_reached_by(&self.inner)
	}
}

impl<C: Cursor, E: EndMarker<C>> Cursor for TakeCursor<C, E> {
	type Item = C::Item;
	type Category = C::Category;

	fn dereference(&self) -> C::Item {
		assert_dereferenceable!(!self.at_end());
		self.inner.dereference()
	}

	fn increment(&mut self) {
		assert_incrementable!(!self.at_end());
		self.inner.increment();
		self.remaining -= 1;
	}

	fn eq(&self, other: &Self) -> bool {
		self.inner.eq(&other.inner)
	}
}

impl<C: BidirectionalCursor, E: EndMarker<C>> BidirectionalCursor for TakeCursor<C, E> {
	fn decrement(&mut self) {
		self.inner.decrement();
		self.remaining += 1;
	}
}

impl<C: RandomAccessCursor, E: EndMarker<C>> RandomAccessCursor for TakeCursor<C, E> {
	fn plus_is(&mut self, offset: isize) {
		let remaining = offset_index(self.remaining, -offset);
		assert_incrementable!(remaining.is_some());
		self.inner.plus_is(offset);
		self.remaining = remaining.unwrap_or(0);
	}

	fn difference(&self, other: &Self) -> isize {
		self.inner.difference(&other.inner)
	}
}

impl<C: Cursor, E: EndMarker<C>, T> SentinelEq<T> for TakeCursor<C, E> {
	fn eq_sentinel(&self, _: &Sentinel<T>) -> bool {
		self.at_end()
	}
}

impl<C: RandomAccessCursor, E: SizedEnd<C>, T> SentinelDifference<T> for TakeCursor<C, E> {
	fn difference_sentinel(&self, _: &Sentinel<T>) -> isize {
		let left = usize::try_from(self.end.distance_from(&self.inner)).unwrap_or(0);
		-isize::try_from(min(self.remaining, left)).unwrap_or(isize::MAX)
	}
}

impl<V: Iterable> Iterable for Take<V>
where
	CategoryOf<V::Cursor>: CheapEnd<V::Cursor, V::End, TakeCursor<V::Cursor, V::End>>,
{
	type Cursor = TakeCursor<V::Cursor, V::End>;
	type End =
		<CategoryOf<V::Cursor> as CheapEnd<V::Cursor, V::End, Self::Cursor>>::Output;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(TakeCursor {
			inner: self.inner.begin().into_cursor(),
			remaining: self.n,
			end: self.inner.end(),
		})
	}

	fn end(&self) -> Self::End {
		let end = self.inner.end();
		let stored_end = end.clone();
		<CategoryOf<V::Cursor> as CheapEnd<V::Cursor, V::End, Self::Cursor>>::cheap_end(
			|| self.inner.begin().into_cursor(),
			end,
			self.n,
			|inner, taken| TakeCursor {
				inner,
				remaining: self.n - taken,
				end: stored_end,
			},
		)
	}
}

impl<V: SizedIterable> SizedIterable for Take<V>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		min(self.n, self.inner.size())
	}
}

lazy_view!([V] Take<V>);
