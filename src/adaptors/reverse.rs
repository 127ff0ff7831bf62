//! Back-to-front traversal.

use crate::{
	cursor::{BidirectionalCursor, Cursor, RandomAccessCursor},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::Terminal,
};

/// Walks a bidirectional sequence from its end to its begin.
///
/// The input's end must be a real position or convertible into one ([`Terminal`]).
/// Each dereference steps a copy of the inner cursor back, which repeats any work that stepping back does.
/// [`CachedReverse`](`super::cached_reverse::CachedReverse`) avoids that.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Reverse<V> {
	inner: V,
}

/// The [`Adaptor`] behind [`reverse`](`crate::adaptors::reverse`).
#[derive(Debug, Clone, Copy)]
pub struct ReverseAdaptor;

impl<I: IntoView> Adaptor<I> for ReverseAdaptor {
	type Output = Reverse<I::View>;

	fn call(self, iterable: I) -> Self::Output {
		Reverse {
			inner: iterable.into_view(),
		}
	}
}

/// The cursor of [`Reverse`]. It points one past the element it yields.
#[derive(Debug, Clone)]
pub struct ReverseCursor<C> {
	inner: C,
}

impl<C: BidirectionalCursor> Cursor for ReverseCursor<C> {
	type Item = C::Item;
	type Category = C::Category;

	fn dereference(&self) -> C::Item {
		let mut previous = self.inner.clone();
		previous.decrement();
		previous.dereference()
	}

	fn increment(&mut self) {
		self.inner.decrement()
	}

	fn eq(&self, other: &Self) -> bool {
		self.inner.eq(&other.inner)
	}
}

impl<C: BidirectionalCursor> BidirectionalCursor for ReverseCursor<C> {
	fn decrement(&mut self) {
		self.inner.increment()
	}
}

impl<C: RandomAccessCursor> RandomAccessCursor for ReverseCursor<C> {
	fn plus_is(&mut self, offset: isize) {
		self.inner.plus_is(-offset)
	}

	fn difference(&self, other: &Self) -> isize {
		other.inner.difference(&self.inner)
	}
}

impl<V: Iterable> Iterable for Reverse<V>
where
	V::Cursor: BidirectionalCursor,
	V::End: Terminal<V::Cursor>,
{
	type Cursor = ReverseCursor<V::Cursor>;
	type End = Iter<Self::Cursor>;

	fn begin(&self) -> Iter<Self::Cursor> {
		let begin = self.inner.begin().into_cursor();
		Iter::new(ReverseCursor {
			inner: self.inner.end().materialize(&begin),
		})
	}

	fn end(&self) -> Self::End {
		Iter::new(ReverseCursor {
			inner: self.inner.begin().into_cursor(),
		})
	}
}

impl<V: SizedIterable> SizedIterable for Reverse<V>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size()
	}
}

lazy_view!([V] Reverse<V>);
