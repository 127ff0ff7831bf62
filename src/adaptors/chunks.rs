//! Fixed-size, non-overlapping windows.

use crate::{
	algorithm::CategoryOf,
	category::{CheapEnd, Traversal},
	cursor::{
		offset_index, signed_difference, BidirectionalCursor, Cursor, RandomAccessCursor,
		SentinelEq,
	},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
	sentinel::{EndMarker, Sentinel, SizedEnd},
	sources::subrange::{subrange, Subrange},
};

use super::take::Take;

/// Splits a sequence into chunks of `size` elements. The last chunk may be shorter.
///
/// Each chunk is itself a view into the input, and chunks have the input's category.
/// Stepping back uses the position within the sequence to size the last chunk correctly,
/// so only random-access inputs get a real end position. Other inputs end in a [`Sentinel`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Chunks<V> {
	inner: V,
	size: usize,
}

/// The [`Adaptor`] behind [`chunks`](`crate::adaptors::chunks`).
#[derive(Debug, Clone, Copy)]
pub struct ChunksAdaptor(usize);

impl ChunksAdaptor {
	/// # Panics
	///
	/// Iff `size` is zero.
	pub(crate) fn new(size: usize) -> Self {
		assert!(size != 0, "Chunk size must not be zero");
		Self(size)
	}
}

impl<I: IntoView> Adaptor<I> for ChunksAdaptor {
	type Output = Chunks<I::View>;

	fn call(self, iterable: I) -> Self::Output {
		Chunks {
			inner: iterable.into_view(),
			size: self.0,
		}
	}
}

/// The cursor of [`Chunks`].
#[derive(Debug, Clone)]
pub struct ChunksCursor<C, E> {
	start: C,
	end: E,
	size: usize,
	index: usize,
}

/// One chunk yielded by [`Chunks`].
pub type Chunk<C, E> = Take<Subrange<C, E>>;

impl<C: Cursor, E: EndMarker<C>> Cursor for ChunksCursor<C, E>
where
	CategoryOf<C>: Traversal<C, E>,
{
	type Item = Chunk<C, E>;
	type Category = C::Category;

	fn dereference(&self) -> Self::Item {
		assert_dereferenceable!(!self.end.is_reached_by(&self.start));
		Take::new(
			subrange(Iter::new(self.start.clone()), self.end.clone()),
			self.size,
		)
	}

	fn increment(&mut self) {
		assert_incrementable!(!self.end.is_reached_by(&self.start));
		self.index +=
			<CategoryOf<C> as Traversal<C, E>>::advance(&mut self.start, &self.end, self.size);
	}

	fn eq(&self, other: &Self) -> bool {
		self.start.eq(&other.start)
	}
}

impl<C: BidirectionalCursor, E: EndMarker<C>> BidirectionalCursor for ChunksCursor<C, E>
where
	CategoryOf<C>: Traversal<C, E>,
{
	fn decrement(&mut self) {
		assert_decrementable!(self.index > 0);
		let step = match self.index % self.size {
			0 => self.size,
			partial => partial,
		};
		for _ in 0..step {
			self.start.decrement();
		}
		self.index -= step;
	}
}

/// Offsets count whole chunks. Moving forward stops at the end, even if the last chunk is short.
impl<C: RandomAccessCursor, E: SizedEnd<C>> RandomAccessCursor for ChunksCursor<C, E>
where
	CategoryOf<C>: Traversal<C, E>,
{
	fn plus_is(&mut self, offset: isize) {
		let size = isize::try_from(self.size).unwrap_or(isize::MAX);
		let steps = if offset >= 0 {
			let wanted = offset.saturating_mul(size);
			let left = self.end.distance_from(&self.start);
			assert_incrementable!(wanted <= left || wanted - left < size);
			wanted.min(left)
		} else {
			// Only the end can sit inside a chunk, after a short last one.
			let partial = isize::try_from(self.index % self.size).unwrap_or(0);
			let back = match partial {
				0 => offset.saturating_mul(size),
				partial => (offset + 1).saturating_mul(size) - partial,
			};
			assert_decrementable!(offset_index(self.index, back).is_some());
			back
		};
		self.start.plus_is(steps);
		self.index = offset_index(self.index, steps).unwrap_or(0);
	}

	fn difference(&self, other: &Self) -> isize {
		let elements = signed_difference(self.index, other.index);
		let size = isize::try_from(self.size).unwrap_or(isize::MAX);
		match (elements / size, elements % size) {
			(chunks, 0) => chunks,
			(chunks, _) => chunks + elements.signum(),
		}
	}
}

impl<C: Cursor, E: EndMarker<C>, T> SentinelEq<T> for ChunksCursor<C, E>
where
	CategoryOf<C>: Traversal<C, E>,
{
	fn eq_sentinel(&self, _: &Sentinel<T>) -> bool {
		self.end.is_reached_by(&self.start)
	}
}

impl<V: Iterable> Iterable for Chunks<V>
where
	CategoryOf<V::Cursor>: Traversal<V::Cursor, V::End>
		+ CheapEnd<V::Cursor, V::End, ChunksCursor<V::Cursor, V::End>>,
{
	type Cursor = ChunksCursor<V::Cursor, V::End>;
	type End =
		<CategoryOf<V::Cursor> as CheapEnd<V::Cursor, V::End, Self::Cursor>>::Output;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(ChunksCursor {
			start: self.inner.begin().into_cursor(),
			end: self.inner.end(),
			size: self.size,
			index: 0,
		})
	}

	fn end(&self) -> Self::End {
		let end = self.inner.end();
		let stored_end = end.clone();
		<CategoryOf<V::Cursor> as CheapEnd<V::Cursor, V::End, Self::Cursor>>::cheap_end(
			|| self.inner.begin().into_cursor(),
			end,
			usize::MAX,
			|start, index| ChunksCursor {
				start,
				end: stored_end,
				size: self.size,
				index,
			},
		)
	}
}

impl<V: SizedIterable> SizedIterable for Chunks<V>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size().div_ceil(self.size)
	}
}

lazy_view!([V] Chunks<V>);
