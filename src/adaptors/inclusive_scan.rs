//! Running accumulation.

use tap::{Pipe, Tap};

use crate::{
	category::Forward,
	cursor::{Cursor, SentinelEq},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{EndMarker, LiftEnd, Sentinel},
};

/// Yields `f(init, x0)`, then `f(f(init, x0), x1)` and so on.
///
/// Each element depends on all previous ones, so this is [`Forward`] only.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct InclusiveScan<V, T, F> {
	inner: V,
	init: T,
	f: F,
}

/// The [`Adaptor`] behind [`inclusive_scan`](`crate::adaptors::inclusive_scan`).
#[derive(Debug, Clone, Copy)]
pub struct InclusiveScanAdaptor<T, F> {
	pub(crate) init: T,
	pub(crate) f: F,
}

impl<I: IntoView, T, F> Adaptor<I> for InclusiveScanAdaptor<T, F> {
	type Output = InclusiveScan<I::View, T, F>;

	fn call(self, iterable: I) -> Self::Output {
		InclusiveScan {
			inner: iterable.into_view(),
			init: self.init,
			f: self.f,
		}
	}
}

/// The cursor of [`InclusiveScan`]. It holds the accumulator for its current position.
#[derive(Debug, Clone)]
pub struct InclusiveScanCursor<C, E, T, F> {
	inner: C,
	end: E,
	accumulator: T,
	f: F,
}

impl<C, E, T, F> InclusiveScanCursor<C, E, T, F>
where
	C: Cursor,
	E: EndMarker<C>,
	T: Clone,
	F: FnMut(&T, C::Item) -> T + Clone,
{
	fn accumulate(&mut self) {
		if !self.end.is_reached_by(&self.inner) {
			self.accumulator = (self.f)(&self.accumulator, self.inner.dereference());
		}
	}
}

impl<C, E, T, F> Cursor for InclusiveScanCursor<C, E, T, F>
where
	C: Cursor,
	E: EndMarker<C>,
	T: Clone,
	F: FnMut(&T, C::Item) -> T + Clone,
{
	type Item = T;
	type Category = Forward;

	fn dereference(&self) -> T {
		assert_dereferenceable!(!self.end.is_reached_by(&self.inner));
		self.accumulator.clone()
	}

	fn increment(&mut self) {
		assert_incrementable!(!self.end.is_reached_by(&self.inner));
		self.inner.increment();
		self.accumulate();
	}

	fn eq(&self, other: &Self) -> bool {
		self.inner.eq(&other.inner)
	}
}

impl<C, E, T, F, S> SentinelEq<S> for InclusiveScanCursor<C, E, T, F>
where
	C: Cursor,
	E: EndMarker<C>,
	T: Clone,
	F: FnMut(&T, C::Item) -> T + Clone,
{
	fn eq_sentinel(&self, _: &Sentinel<S>) -> bool {
		self.end.is_reached_by(&self.inner)
	}
}

impl<V: Iterable, T, F> Iterable for InclusiveScan<V, T, F>
where
	T: Clone,
	F: FnMut(&T, <V::Cursor as Cursor>::Item) -> T + Clone,
	V::End: LiftEnd<V::Cursor, InclusiveScanCursor<V::Cursor, V::End, T, F>>,
{
	type Cursor = InclusiveScanCursor<V::Cursor, V::End, T, F>;
	type End = <V::End as LiftEnd<V::Cursor, Self::Cursor>>::Output;

	fn begin(&self) -> Iter<Self::Cursor> {
		InclusiveScanCursor {
			inner: self.inner.begin().into_cursor(),
			end: self.inner.end(),
			accumulator: self.init.clone(),
			f: self.f.clone(),
		}
		.tap_mut(InclusiveScanCursor::accumulate)
		.pipe(Iter::new)
	}

	fn end(&self) -> Self::End {
		let end = self.inner.end();
		let stored_end = end.clone();
		let accumulator = self.init.clone();
		let f = self.f.clone();
		end.lift(|inner| InclusiveScanCursor {
			inner,
			end: stored_end,
			accumulator,
			f,
		})
	}
}

impl<V: SizedIterable, T, F> SizedIterable for InclusiveScan<V, T, F>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size()
	}
}

lazy_view!([V, T, F] InclusiveScan<V, T, F>);
