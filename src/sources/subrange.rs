//! A begin/end pair as a view.

use crate::{
	cursor::{Cursor, RandomAccessCursor},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	sentinel::{EndMarker, SizedEnd},
};

/// The positions from a begin cursor up to an end marker.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Subrange<C, E> {
	begin: C,
	end: E,
}

/// Views the positions from `begin` up to `end`.
pub fn subrange<C: Cursor, E: EndMarker<C>>(begin: Iter<C>, end: E) -> Subrange<C, E> {
	Subrange {
		begin: begin.into_cursor(),
		end,
	}
}

impl<C: Cursor, E: EndMarker<C>> Iterable for Subrange<C, E> {
	type Cursor = C;
	type End = E;

	fn begin(&self) -> Iter<C> {
		Iter::new(self.begin.clone())
	}

	fn end(&self) -> E {
		self.end.clone()
	}

	fn into_bounds(self) -> (Iter<C>, E) {
		(Iter::new(self.begin), self.end)
	}
}

impl<C: RandomAccessCursor, E: SizedEnd<C>> SizedIterable for Subrange<C, E> {
	fn size(&self) -> usize {
		usize::try_from(self.end.distance_from(&self.begin)).unwrap_or(0)
	}
}

lazy_view!([C, E] Subrange<C, E>);
