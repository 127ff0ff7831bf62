//! Element-wise transformation.

use crate::{
	cursor::{
		BidirectionalCursor, Cursor, RandomAccessCursor, SentinelDifference, SentinelEq,
	},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{LiftEnd, Sentinel},
};

/// Applies a function to each element on dereference.
///
/// Keeps its input's category and end kind.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Map<V, F> {
	inner: V,
	f: F,
}

/// The [`Adaptor`] behind [`map`](`crate::adaptors::map`).
#[derive(Debug, Clone, Copy)]
pub struct MapAdaptor<F>(pub(crate) F);

impl<I: IntoView, F> Adaptor<I> for MapAdaptor<F> {
	type Output = Map<I::View, F>;

	fn call(self, iterable: I) -> Self::Output {
		Map {
			inner: iterable.into_view(),
			f: self.0,
		}
	}
}

/// The cursor of [`Map`].
#[derive(Debug, Clone)]
pub struct MapCursor<C, F> {
	inner: C,
	f: F,
}

impl<C: Cursor, F, U> Cursor for MapCursor<C, F>
where
	F: Fn(C::Item) -> U + Clone,
{
	type Item = U;
	type Category = C::Category;

	fn dereference(&self) -> U {
		(self.f)(self.inner.dereference())
	}

	fn increment(&mut self) {
		self.inner.increment()
	}

	fn eq(&self, other: &Self) -> bool {
		self.inner.eq(&other.inner)
	}
}

impl<C: BidirectionalCursor, F, U> BidirectionalCursor for MapCursor<C, F>
where
	F: Fn(C::Item) -> U + Clone,
{
	fn decrement(&mut self) {
		self.inner.decrement()
	}
}

impl<C: RandomAccessCursor, F, U> RandomAccessCursor for MapCursor<C, F>
where
	F: Fn(C::Item) -> U + Clone,
{
	fn plus_is(&mut self, offset: isize) {
		self.inner.plus_is(offset)
	}

	fn difference(&self, other: &Self) -> isize {
		self.inner.difference(&other.inner)
	}
}

impl<C: SentinelEq<T>, F, U, T> SentinelEq<T> for MapCursor<C, F>
where
	F: Fn(C::Item) -> U + Clone,
{
	fn eq_sentinel(&self, sentinel: &Sentinel<T>) -> bool {
		self.inner.eq_sentinel(sentinel)
	}
}

impl<C: SentinelDifference<T>, F, U, T> SentinelDifference<T> for MapCursor<C, F>
where
	F: Fn(C::Item) -> U + Clone,
{
	fn difference_sentinel(&self, sentinel: &Sentinel<T>) -> isize {
		self.inner.difference_sentinel(sentinel)
	}
}

impl<V: Iterable, F, U> Iterable for Map<V, F>
where
	F: Fn(<V::Cursor as Cursor>::Item) -> U + Clone,
	V::End: LiftEnd<V::Cursor, MapCursor<V::Cursor, F>>,
{
	type Cursor = MapCursor<V::Cursor, F>;
	type End = <V::End as LiftEnd<V::Cursor, Self::Cursor>>::Output;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(MapCursor {
			inner: self.inner.begin().into_cursor(),
			f: self.f.clone(),
		})
	}

	fn end(&self) -> Self::End {
		let f = self.f.clone();
		self.inner.end().lift(|inner| MapCursor { inner, f })
	}

	fn into_bounds(self) -> (Iter<Self::Cursor>, Self::End) {
		let end = self.end();
		let begin = MapCursor {
			inner: self.inner.begin().into_cursor(),
			f: self.f,
		};
		(Iter::new(begin), end)
	}
}

impl<V: SizedIterable, F> SizedIterable for Map<V, F>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size()
	}
}

lazy_view!([V, F] Map<V, F>);
