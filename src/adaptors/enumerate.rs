//! Pairs each element with its index.

use crate::{
	algorithm::CategoryOf,
	category::CheapEnd,
	cursor::{offset_index, BidirectionalCursor, Cursor, RandomAccessCursor, SentinelEq},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{EndMarker, Sentinel},
};

/// Yields `(index, element)` pairs, counting from zero.
///
/// A real end position needs its index, so only random-access inputs get one.
/// Other inputs end in a [`Sentinel`] around their own end, which keeps iteration single-pass.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Enumerate<V> {
	inner: V,
}

/// The [`Adaptor`] behind [`enumerate`](`crate::adaptors::enumerate`).
#[derive(Debug, Clone, Copy)]
pub struct EnumerateAdaptor;

impl<I: IntoView> Adaptor<I> for EnumerateAdaptor {
	type Output = Enumerate<I::View>;

	fn call(self, iterable: I) -> Self::Output {
		Enumerate {
			inner: iterable.into_view(),
		}
	}
}

/// The cursor of [`Enumerate`].
#[derive(Debug, Clone)]
pub struct EnumerateCursor<C> {
	inner: C,
	index: usize,
}

impl<C: Cursor> Cursor for EnumerateCursor<C> {
	type Item = (usize, C::Item);
	type Category = C::Category;

	fn dereference(&self) -> Self::Item {
		(self.index, self.inner.dereference())
	}

	fn increment(&mut self) {
		self.inner.increment();
		self.index += 1;
	}

	fn eq(&self, other: &Self) -> bool {
		self.inner.eq(&other.inner)
	}
}

impl<C: BidirectionalCursor> BidirectionalCursor for EnumerateCursor<C> {
	fn decrement(&mut self) {
		assert_decrementable!(self.index > 0);
		self.inner.decrement();
		self.index -= 1;
	}
}

impl<C: RandomAccessCursor> RandomAccessCursor for EnumerateCursor<C> {
	fn plus_is(&mut self, offset: isize) {
		let index = offset_index(self.index, offset);
		assert_decrementable!(index.is_some());
		self.inner.plus_is(offset);
		self.index = index.unwrap_or(0);
	}

	fn difference(&self, other: &Self) -> isize {
		self.inner.difference(&other.inner)
	}
}

impl<C: Cursor, E: EndMarker<C>> SentinelEq<E> for EnumerateCursor<C> {
	fn eq_sentinel(&self, sentinel: &Sentinel<E>) -> bool {
		sentinel.payload().is_reached_by(&self.inner)
	}
}

impl<V: Iterable> Iterable for Enumerate<V>
where
	CategoryOf<V::Cursor>: CheapEnd<V::Cursor, V::End, EnumerateCursor<V::Cursor>>,
{
	type Cursor = EnumerateCursor<V::Cursor>;
	type End =
		<CategoryOf<V::Cursor> as CheapEnd<V::Cursor, V::End, Self::Cursor>>::Output;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(EnumerateCursor {
			inner: self.inner.begin().into_cursor(),
			index: 0,
		})
	}

	fn end(&self) -> Self::End {
		<CategoryOf<V::Cursor> as CheapEnd<V::Cursor, V::End, Self::Cursor>>::cheap_end(
			|| self.inner.begin().into_cursor(),
			self.inner.end(),
			usize::MAX,
			|inner, index| EnumerateCursor { inner, index },
		)
	}
}

impl<V: SizedIterable> SizedIterable for Enumerate<V>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size()
	}
}

lazy_view!([V] Enumerate<V>);
