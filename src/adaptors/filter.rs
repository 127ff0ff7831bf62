//! Predicate-based selection.

use tap::{Pipe, Tap};

use crate::{
	category::AtMostBidirectional,
	cursor::{BidirectionalCursor, Cursor, SentinelEq},
	iter::Iter,
	iterable::Iterable,
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{EndMarker, LiftEnd, Sentinel},
};

/// Skips elements for which a predicate returns `false`.
///
/// Finding the previous match is a linear search, so this is at most bidirectional.
/// If the input has a real end position, so does the filtered sequence.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Filter<V, P> {
	inner: V,
	predicate: P,
}

/// The [`Adaptor`] behind [`filter`](`crate::adaptors::filter`).
#[derive(Debug, Clone, Copy)]
pub struct FilterAdaptor<P>(pub(crate) P);

impl<I: IntoView, P> Adaptor<I> for FilterAdaptor<P> {
	type Output = Filter<I::View, P>;

	fn call(self, iterable: I) -> Self::Output {
		Filter {
			inner: iterable.into_view(),
			predicate: self.0,
		}
	}
}

/// The cursor of [`Filter`].
///
/// It remembers where its sequence begins and ends, so it never searches past either.
#[derive(Debug, Clone)]
pub struct FilterCursor<C, E, P> {
	current: C,
	begin: C,
	end: E,
	predicate: P,
}

impl<C, E, P> FilterCursor<C, E, P>
where
	C: Cursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	fn at_end(&self) -> bool {
		self.end.is_reached_by(&self.current)
	}

	fn seek_forward(&mut self) {
		while !self.at_end() && !(self.predicate)(&self.current.dereference()) {
			self.current.increment();
		}
	}
}

impl<C, E, P> Cursor for FilterCursor<C, E, P>
where
	C: Cursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	type Item = C::Item;
	type Category = AtMostBidirectional<C::Category>;

	fn dereference(&self) -> C::Item {
		assert_dereferenceable!(!self.at_end());
		self.current.dereference()
	}

	fn increment(&mut self) {
		assert_incrementable!(!self.at_end());
		self.current.increment();
		self.seek_forward();
	}

	fn eq(&self, other: &Self) -> bool {
		self.current.eq(&other.current)
	}
}

impl<C, E, P> BidirectionalCursor for FilterCursor<C, E, P>
where
	C: BidirectionalCursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	/// # Panics
	///
	/// If checks are active and no earlier element is accepted.
	/// Otherwise, this stops at the input's begin.
	fn decrement(&mut self) {
		let mut previous = self.current.clone();
		let found = loop {
			if previous.eq(&self.begin) {
				break false;
			}
			previous.decrement();
			if (self.predicate)(&previous.dereference()) {
				break true;
			}
		};
		assert_decrementable!(found);
		self.current = previous;
	}
}

impl<C, E, P, T> SentinelEq<T> for FilterCursor<C, E, P>
where
	C: Cursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	fn eq_sentinel(&self, _: &Sentinel<T>) -> bool {
		self.at_end()
	}
}

impl<V: Iterable, P> Iterable for Filter<V, P>
where
	P: FnMut(&<V::Cursor as Cursor>::Item) -> bool + Clone,
	V::End: LiftEnd<V::Cursor, FilterCursor<V::Cursor, V::End, P>>,
{
	type Cursor = FilterCursor<V::Cursor, V::End, P>;
	type End = <V::End as LiftEnd<V::Cursor, Self::Cursor>>::Output;

	fn begin(&self) -> Iter<Self::Cursor> {
		let begin = self.inner.begin().into_cursor();
		FilterCursor {
			current: begin.clone(),
			begin,
			end: self.inner.end(),
			predicate: self.predicate.clone(),
		}
		.tap_mut(FilterCursor::seek_forward)
		.pipe(Iter::new)
	}

	fn end(&self) -> Self::End {
		let end = self.inner.end();
		let stored_end = end.clone();
		let begin = self.inner.begin().into_cursor();
		let predicate = self.predicate.clone();
		end.lift(|current| FilterCursor {
			current,
			begin,
			end: stored_end,
			predicate,
		})
	}
}

lazy_view!([V, P] Filter<V, P>);
