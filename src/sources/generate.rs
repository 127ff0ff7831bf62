//! Sequences produced by calling a function.
//!
//! [`Generate`] cursors call their function the first time a position is dereferenced and cache the result,
//! so dereferencing is repeatable and positions that are stepped over cost nothing.
//! [`GenerateWhile`] has to call its function on arrival instead, to know whether it reached the end.
//!
//! Every cursor carries its own copy of the function, so copies of a cursor diverge independently,
//! and so do cursors from separate [`begin`](`crate::Iterable::begin`) calls.

use core::cell::{OnceCell, RefCell};

use crate::{
	category::Forward,
	cursor::{Cursor, SentinelEq},
	iter::Iter,
	iterable::Iterable,
	sentinel::{DefaultSentinel, Sentinel, DEFAULT_SENTINEL},
};

/// Calls a function for each element, either forever or a fixed number of times.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Generate<F> {
	f: F,
	limit: Option<usize>,
}

/// An infinite sequence of `f()` results.
pub fn generate<F: FnMut() -> T + Clone, T: Clone>(f: F) -> Generate<F> {
	Generate { f, limit: None }
}

/// The results of calling `f` `count` times.
pub fn generate_n<F: FnMut() -> T + Clone, T: Clone>(f: F, count: usize) -> Generate<F> {
	Generate {
		f,
		limit: Some(count),
	}
}

/// The cursor of [`Generate`].
#[derive(Debug, Clone)]
pub struct GenerateCursor<F, T> {
	f: RefCell<F>,
	current: OnceCell<T>,
	produced: usize,
	limit: Option<usize>,
}

impl<F: FnMut() -> T + Clone, T: Clone> GenerateCursor<F, T> {
	fn new(f: F, limit: Option<usize>) -> Self {
		Self {
			f: RefCell::new(f),
			current: OnceCell::new(),
			produced: 0,
			limit,
		}
	}

	fn at_end(&self) -> bool {
		self.limit == Some(self.produced)
	}
}

impl<F: FnMut() -> T + Clone, T: Clone> Cursor for GenerateCursor<F, T> {
	type Item = T;
	type Category = Forward;

	fn dereference(&self) -> T {
		if self.at_end() {
			crate::assert::dereferenced_end()
		}
		self.current
			.get_or_init(|| {
				let mut f = self.f.borrow_mut();
				(*f)()
			})
			.clone()
	}

	fn increment(&mut self) {
		assert_incrementable!(!self.at_end());
		self.produced += 1;
		self.current = OnceCell::new();
	}

	fn eq(&self, other: &Self) -> bool {
		self.produced == other.produced
	}
}

impl<F: FnMut() -> T + Clone, T: Clone, S> SentinelEq<S> for GenerateCursor<F, T> {
	fn eq_sentinel(&self, _: &Sentinel<S>) -> bool {
		self.at_end()
	}
}

impl<F: FnMut() -> T + Clone, T: Clone> Iterable for Generate<F> {
	type Cursor = GenerateCursor<F, T>;
	type End = DefaultSentinel;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(GenerateCursor::new(self.f.clone(), self.limit))
	}

	fn end(&self) -> Self::End {
		DEFAULT_SENTINEL
	}

	fn into_bounds(self) -> (Iter<Self::Cursor>, Self::End) {
		(
			Iter::new(GenerateCursor::new(self.f, self.limit)),
			DEFAULT_SENTINEL,
		)
	}
}

lazy_view!([F] Generate<F>);

/// Calls a function until it returns [`None`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct GenerateWhile<F> {
	f: F,
}

/// The [`Some`] results of `f()`, up to its first [`None`].
pub fn generate_while<F: FnMut() -> Option<T> + Clone, T: Clone>(f: F) -> GenerateWhile<F> {
	GenerateWhile { f }
}

/// The cursor of [`GenerateWhile`].
#[derive(Debug, Clone)]
pub struct GenerateWhileCursor<F, T> {
	f: F,
	current: Option<T>,
	produced: usize,
}

impl<F: FnMut() -> Option<T> + Clone, T: Clone> GenerateWhileCursor<F, T> {
	fn new(mut f: F) -> Self {
		let current = f();
		Self {
			f,
			current,
			produced: 0,
		}
	}
}

impl<F: FnMut() -> Option<T> + Clone, T: Clone> Cursor for GenerateWhileCursor<F, T> {
	type Item = T;
	type Category = Forward;

	fn dereference(&self) -> T {
		match &self.current {
			Some(value) => value.clone(),
			None => crate::assert::dereferenced_end(),
		}
	}

	fn increment(&mut self) {
		assert_incrementable!(self.current.is_some());
		self.produced += 1;
		self.current = (self.f)();
	}

	fn eq(&self, other: &Self) -> bool {
		self.produced == other.produced
	}
}

impl<F: FnMut() -> Option<T> + Clone, T: Clone, S> SentinelEq<S> for GenerateWhileCursor<F, T> {
	fn eq_sentinel(&self, _: &Sentinel<S>) -> bool {
		self.current.is_none()
	}
}

impl<F: FnMut() -> Option<T> + Clone, T: Clone> Iterable for GenerateWhile<F> {
	type Cursor = GenerateWhileCursor<F, T>;
	type End = DefaultSentinel;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(GenerateWhileCursor::new(self.f.clone()))
	}

	fn end(&self) -> Self::End {
		DEFAULT_SENTINEL
	}

	fn into_bounds(self) -> (Iter<Self::Cursor>, Self::End) {
		(Iter::new(GenerateWhileCursor::new(self.f)), DEFAULT_SENTINEL)
	}
}

lazy_view!([F] GenerateWhile<F>);
