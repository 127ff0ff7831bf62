//! One value, several times.

use crate::{
	category::RandomAccess,
	cursor::{offset_index, signed_difference, BidirectionalCursor, Cursor, RandomAccessCursor},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
};

/// `value`, `count` times.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Repeat<T> {
	value: T,
	count: usize,
}

/// Repeats `value` `count` times, cloning it on each dereference.
pub fn repeat<T: Clone>(value: T, count: usize) -> Repeat<T> {
	Repeat { value, count }
}

/// The cursor of [`Repeat`].
#[derive(Debug, Clone)]
pub struct RepeatCursor<T> {
	value: T,
	index: usize,
	count: usize,
}

impl<T: Clone> Cursor for RepeatCursor<T> {
	type Item = T;
	type Category = RandomAccess;

	fn dereference(&self) -> T {
		assert_dereferenceable!(self.index < self.count);
		self.value.clone()
	}

	fn increment(&mut self) {
		assert_incrementable!(self.index < self.count);
		self.index += 1;
	}

	fn eq(&self, other: &Self) -> bool {
		assert_compatible!(self.count == other.count);
		self.index == other.index
	}
}

impl<T: Clone> BidirectionalCursor for RepeatCursor<T> {
	fn decrement(&mut self) {
		assert_decrementable!(self.index > 0);
		self.index -= 1;
	}
}

impl<T: Clone> RandomAccessCursor for RepeatCursor<T> {
	fn plus_is(&mut self, offset: isize) {
		let index = offset_index(self.index, offset).filter(|&index| index <= self.count);
		assert_incrementable!(index.is_some());
		self.index = index.unwrap_or(self.count);
	}

	fn difference(&self, other: &Self) -> isize {
		assert_compatible!(self.count == other.count);
		signed_difference(self.index, other.index)
	}
}

impl<T: Clone> Iterable for Repeat<T> {
	type Cursor = RepeatCursor<T>;
	type End = Iter<RepeatCursor<T>>;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(RepeatCursor {
			value: self.value.clone(),
			index: 0,
			count: self.count,
		})
	}

	fn end(&self) -> Self::End {
		Iter::new(RepeatCursor {
			value: self.value.clone(),
			index: self.count,
			count: self.count,
		})
	}
}

impl<T: Clone> SizedIterable for Repeat<T> {
	fn size(&self) -> usize {
		self.count
	}
}

lazy_view!([T] Repeat<T>);
