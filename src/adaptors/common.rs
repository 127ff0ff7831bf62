//! Giving begin and end the same type.

use crate::{
	category::Forward,
	cursor::{Cursor, SentinelEq},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{EndMarker, Sentinel},
};

/// Makes a sentineled sequence symmetric, for consumers that need begin and end of one type.
///
/// Sequences that already are symmetric pass through unchanged.
/// Otherwise both ends are wrapped in [`CommonCursor`], which is [`Forward`] only.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Common<V> {
	inner: V,
}

/// The [`Adaptor`] behind [`common`](`crate::adaptors::common`).
#[derive(Debug, Clone, Copy)]
pub struct CommonAdaptor;

impl<I: IntoView> Adaptor<I> for CommonAdaptor {
	type Output = Common<I::View>;

	fn call(self, iterable: I) -> Self::Output {
		Common {
			inner: iterable.into_view(),
		}
	}
}

/// Either a position or a sentinel, so that both can share one type.
#[derive(Debug, Clone)]
pub enum CommonCursor<C, T> {
	/// A real position.
	Position(C),
	/// The end.
	End(Sentinel<T>),
}

impl<C: SentinelEq<T>, T: Clone> Cursor for CommonCursor<C, T> {
	type Item = C::Item;
	type Category = Forward;

	fn dereference(&self) -> C::Item {
		match self {
			Self::Position(cursor) => cursor.dereference(),
			Self::End(_) => crate::assert::dereferenced_end(),
		}
	}

	fn increment(&mut self) {
		assert_incrementable!(matches!(self, Self::Position(_)));
		if let Self::Position(cursor) = self {
			cursor.increment()
		}
	}

	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Position(a), Self::Position(b)) => a.eq(b),
			(Self::Position(cursor), Self::End(sentinel))
			| (Self::End(sentinel), Self::Position(cursor)) => cursor.eq_sentinel(sentinel),
			(Self::End(_), Self::End(_)) => true,
		}
	}
}

/// How an end marker is made symmetric with its cursors.
pub trait Commonize<C: Cursor>: EndMarker<C> {
	/// The shared position type.
	type Cursor: Cursor<Item = C::Item>;

	/// Converts a begin position.
	fn common_begin(begin: C) -> Self::Cursor;

	/// Converts this end marker.
	fn common_end(self) -> Iter<Self::Cursor>;
}

impl<C: Cursor> Commonize<C> for Iter<C> {
	type Cursor = C;

	fn common_begin(begin: C) -> C {
		begin
	}

	fn common_end(self) -> Self {
		self
	}
}

impl<C: SentinelEq<T>, T: Clone> Commonize<C> for Sentinel<T> {
	type Cursor = CommonCursor<C, T>;

	fn common_begin(begin: C) -> Self::Cursor {
		CommonCursor::Position(begin)
	}

	fn common_end(self) -> Iter<Self::Cursor> {
		Iter::new(CommonCursor::End(self))
	}
}

impl<V: Iterable> Iterable for Common<V>
where
	V::End: Commonize<V::Cursor>,
{
	type Cursor = <V::End as Commonize<V::Cursor>>::Cursor;
	type End = Iter<Self::Cursor>;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(<V::End as Commonize<V::Cursor>>::common_begin(
			self.inner.begin().into_cursor(),
		))
	}

	fn end(&self) -> Self::End {
		self.inner.end().common_end()
	}
}

impl<V: SizedIterable> SizedIterable for Common<V>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size()
	}
}

lazy_view!([V] Common<V>);
