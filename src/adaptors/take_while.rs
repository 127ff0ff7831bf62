//! The longest prefix whose elements satisfy a predicate.

use tap::{Pipe, Tap};

use crate::{
	category::AtMostBidirectional,
	cursor::{BidirectionalCursor, Cursor, SentinelEq},
	iter::Iter,
	iterable::Iterable,
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{DefaultSentinel, EndMarker, Sentinel, DEFAULT_SENTINEL},
};

/// Ends at the first element for which a predicate returns `false`.
///
/// Where that is isn't known up front, so the end is always a [`Sentinel`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct TakeWhile<V, P> {
	inner: V,
	predicate: P,
}

/// The [`Adaptor`] behind [`take_while`](`crate::adaptors::take_while`).
#[derive(Debug, Clone, Copy)]
pub struct TakeWhileAdaptor<P>(pub(crate) P);

impl<I: IntoView, P> Adaptor<I> for TakeWhileAdaptor<P> {
	type Output = TakeWhile<I::View, P>;

	fn call(self, iterable: I) -> Self::Output {
		TakeWhile {
			inner: iterable.into_view(),
			predicate: self.0,
		}
	}
}

/// The cursor of [`TakeWhile`].
///
/// The predicate's verdict for the current element is cached, so dereferencing doesn't call it.
#[derive(Debug, Clone)]
pub struct TakeWhileCursor<C, E, P> {
	inner: C,
	end: E,
	predicate: P,
	done: bool,
}

impl<C, E, P> TakeWhileCursor<C, E, P>
where
	C: Cursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	fn settle(&mut self) {
		self.done =
			self.end.is_reached_by(&self.inner) || !(self.predicate)(&self.inner.dereference());
	}
}

impl<C, E, P> Cursor for TakeWhileCursor<C, E, P>
where
	C: Cursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	type Item = C::Item;
	type Category = AtMostBidirectional<C::Category>;

	fn dereference(&self) -> C::Item {
		assert_dereferenceable!(!self.done);
		self.inner.dereference()
	}

	fn increment(&mut self) {
		assert_incrementable!(!self.done);
		self.inner.increment();
		self.settle();
	}

	fn eq(&self, other: &Self) -> bool {
		self.inner.eq(&other.inner)
	}
}

impl<C, E, P> BidirectionalCursor for TakeWhileCursor<C, E, P>
where
	C: BidirectionalCursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	fn decrement(&mut self) {
		self.inner.decrement();
		self.done = false;
	}
}

impl<C, E, P, T> SentinelEq<T> for TakeWhileCursor<C, E, P>
where
	C: Cursor,
	E: EndMarker<C>,
	P: FnMut(&C::Item) -> bool + Clone,
{
	fn eq_sentinel(&self, _: &Sentinel<T>) -> bool {
		self.done
	}
}

impl<V: Iterable, P> Iterable for TakeWhile<V, P>
where
	P: FnMut(&<V::Cursor as Cursor>::Item) -> bool + Clone,
{
	type Cursor = TakeWhileCursor<V::Cursor, V::End, P>;
	type End = DefaultSentinel;

	fn begin(&self) -> Iter<Self::Cursor> {
		TakeWhileCursor {
			inner: self.inner.begin().into_cursor(),
			end: self.inner.end(),
			predicate: self.predicate.clone(),
			done: false,
		}
		.tap_mut(TakeWhileCursor::settle)
		.pipe(Iter::new)
	}

	fn end(&self) -> Self::End {
		DEFAULT_SENTINEL
	}
}

lazy_view!([V, P] TakeWhile<V, P>);
