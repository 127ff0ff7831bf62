//! Back-to-front traversal that remembers the previous position.

use crate::{
	cursor::{BidirectionalCursor, Cursor, RandomAccessCursor},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::Terminal,
};

/// Like [`Reverse`](`super::reverse::Reverse`), but each cursor keeps the already-stepped-back inner position around.
///
/// Dereferencing is then free, and every inner position is stepped to once per pass.
/// This pays off for inputs whose decrement is expensive, like a [`Filter`](`super::filter::Filter`).
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct CachedReverse<V> {
	inner: V,
}

/// The [`Adaptor`] behind [`cached_reverse`](`crate::adaptors::cached_reverse`).
#[derive(Debug, Clone, Copy)]
pub struct CachedReverseAdaptor;

impl<I: IntoView> Adaptor<I> for CachedReverseAdaptor {
	type Output = CachedReverse<I::View>;

	fn call(self, iterable: I) -> Self::Output {
		CachedReverse {
			inner: iterable.into_view(),
		}
	}
}

/// The cursor of [`CachedReverse`].
#[derive(Debug, Clone)]
pub struct CachedReverseCursor<C> {
	/// One past the yielded element, in inner order.
	current: C,
	/// The yielded element, unless `current` is at `begin`.
	previous: C,
	begin: C,
}

impl<C: BidirectionalCursor> CachedReverseCursor<C> {
	fn new(current: C, begin: C) -> Self {
		let mut previous = current.clone();
		if !previous.eq(&begin) {
			previous.decrement();
		}
		Self {
			current,
			previous,
			begin,
		}
	}
}

impl<C: BidirectionalCursor> Cursor for CachedReverseCursor<C> {
	type Item = C::Item;
	type Category = C::Category;

	fn dereference(&self) -> C::Item {
		assert_dereferenceable!(!self.current.eq(&self.begin));
		self.previous.dereference()
	}

	fn increment(&mut self) {
		assert_incrementable!(!self.current.eq(&self.begin));
		self.current = self.previous.clone();
		if !self.previous.eq(&self.begin) {
			self.previous.decrement();
		}
	}

	fn eq(&self, other: &Self) -> bool {
		self.current.eq(&other.current)
	}
}

impl<C: BidirectionalCursor> BidirectionalCursor for CachedReverseCursor<C> {
	fn decrement(&mut self) {
		self.previous = self.current.clone();
		self.current.increment();
	}
}

impl<C: RandomAccessCursor> RandomAccessCursor for CachedReverseCursor<C> {
	fn plus_is(&mut self, offset: isize) {
		self.current.plus_is(-offset);
		self.previous = self.current.clone();
		if !self.previous.eq(&self.begin) {
			self.previous.decrement();
		}
	}

	fn difference(&self, other: &Self) -> isize {
		other.current.difference(&self.current)
	}
}

impl<V: Iterable> Iterable for CachedReverse<V>
where
	V::Cursor: BidirectionalCursor,
	V::End: Terminal<V::Cursor>,
{
	type Cursor = CachedReverseCursor<V::Cursor>;
	type End = Iter<Self::Cursor>;

	fn begin(&self) -> Iter<Self::Cursor> {
		let begin = self.inner.begin().into_cursor();
		let current = self.inner.end().materialize(&begin);
		Iter::new(CachedReverseCursor::new(current, begin))
	}

	fn end(&self) -> Self::End {
		let begin = self.inner.begin().into_cursor();
		Iter::new(CachedReverseCursor::new(begin.clone(), begin))
	}
}

impl<V: SizedIterable> SizedIterable for CachedReverse<V>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size()
	}
}

lazy_view!([V] CachedReverse<V>);
