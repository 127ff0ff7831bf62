//! Standard iterators as forward sources.

use crate::{
	category::Forward,
	cursor::{Cursor, SentinelEq},
	iter::Iter,
	iterable::Iterable,
	sentinel::{DefaultSentinel, Sentinel, DEFAULT_SENTINEL},
};

/// A cloneable [`Iterator`] as a [`Forward`] view.
///
/// Each cursor owns a copy of the iterator and looks one element ahead.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct IterSource<I> {
	iter: I,
}

/// Wraps `iter` as a [`Forward`] view, regardless of what it could do otherwise.
pub fn from_iterator<I: IntoIterator>(iter: I) -> IterSource<I::IntoIter>
where
	I::IntoIter: Clone,
{
	IterSource {
		iter: iter.into_iter(),
	}
}

/// The cursor of [`IterSource`].
pub struct IterSourceCursor<I: Iterator> {
	iter: I,
	current: Option<I::Item>,
	position: usize,
}

impl<I: Iterator + Clone> Clone for IterSourceCursor<I>
where
	I::Item: Clone,
{
	fn clone(&self) -> Self {
		Self {
			iter: self.iter.clone(),
			current: self.current.clone(),
			position: self.position,
		}
	}
}

impl<I: Iterator> IterSourceCursor<I> {
	fn new(mut iter: I) -> Self {
		let current = iter.next();
		Self {
			iter,
			current,
			position: 0,
		}
	}
}

impl<I: Iterator + Clone> Cursor for IterSourceCursor<I>
where
	I::Item: Clone,
{
	type Item = I::Item;
	type Category = Forward;

	fn dereference(&self) -> I::Item {
		match &self.current {
			Some(item) => item.clone(),
			None => crate::assert::dereferenced_end(),
		}
	}

	fn increment(&mut self) {
		assert_incrementable!(self.current.is_some());
		self.current = self.iter.next();
		self.position += 1;
	}

	fn eq(&self, other: &Self) -> bool {
		self.position == other.position
	}
}

impl<I: Iterator + Clone, T> SentinelEq<T> for IterSourceCursor<I>
where
	I::Item: Clone,
{
	fn eq_sentinel(&self, _: &Sentinel<T>) -> bool {
		self.current.is_none()
	}
}

impl<I: Iterator + Clone> Iterable for IterSource<I>
where
	I::Item: Clone,
{
	type Cursor = IterSourceCursor<I>;
	type End = DefaultSentinel;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(IterSourceCursor::new(self.iter.clone()))
	}

	fn end(&self) -> Self::End {
		DEFAULT_SENTINEL
	}

	fn into_bounds(self) -> (Iter<Self::Cursor>, Self::End) {
		(Iter::new(IterSourceCursor::new(self.iter)), DEFAULT_SENTINEL)
	}
}

lazy_view!([I] IterSource<I>);
