//! Traversal categories and the type-level rules that combine them.
//!
//! Categories are ordered [`Forward`] < [`Bidirectional`] < [`RandomAccess`].
//! Adaptors never promise more than their inputs can deliver:
//!
//! - one-to-one positional transforms keep their input's category,
//! - predicate-driven transforms are capped through [`AtMostBidirectional`],
//! - multi-input transforms take the [`WeakestOf`] their inputs.

use core::cmp::min;

use crate::{
	cursor::{Cursor, RandomAccessCursor, SentinelEq},
	iter::Iter,
	sentinel::{EndMarker, Sentinel, SizedEnd},
};

mod sealed {
	pub trait Sealed {}
}

/// Runtime mirror of a [`Category`], ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKind {
	/// Single-pass-or-better forward traversal.
	Forward,
	/// Forward traversal plus stepping back.
	Bidirectional,
	/// Constant-time offsets and distances.
	RandomAccess,
}

/// A type-level traversal category.
///
/// This trait is sealed. Every category can be combined with every other one through [`Weakest`].
pub trait Category:
	sealed::Sealed
	+ Copy
	+ Default
	+ 'static
	+ Weakest<Forward>
	+ Weakest<Bidirectional>
	+ Weakest<RandomAccess>
{
	/// The runtime value of this category.
	const KIND: CategoryKind;
}

/// Forward-only traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Forward;

/// Traversal in both directions, one step at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bidirectional;

/// Constant-time jumps and distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccess;

/// Computes the weaker of `Self` and `Other`.
pub trait Weakest<Other> {
	/// The weaker category.
	type Output: Category;
}

/// The weakest of two categories.
pub type WeakestOf<A, B> = <A as Weakest<B>>::Output;

/// `C`, but no stronger than [`Bidirectional`].
pub type AtMostBidirectional<C> = WeakestOf<C, Bidirectional>;

macro_rules! categories {
	($($category:ident => $kind:ident),*$(,)?) => {$(
		impl sealed::Sealed for $category {}
		impl Category for $category {
			const KIND: CategoryKind = CategoryKind::$kind;
		}
	)*};
}
categories!(
	Forward => Forward,
	Bidirectional => Bidirectional,
	RandomAccess => RandomAccess,
);

macro_rules! weakest {
	($($a:ident, $b:ident => $output:ident;)*) => {$(
		impl Weakest<$b> for $a {
			type Output = $output;
		}
	)*};
}
weakest! {
	Forward, Forward => Forward;
	Forward, Bidirectional => Forward;
	Forward, RandomAccess => Forward;
	Bidirectional, Forward => Forward;
	Bidirectional, Bidirectional => Bidirectional;
	Bidirectional, RandomAccess => Bidirectional;
	RandomAccess, Forward => Forward;
	RandomAccess, Bidirectional => Bidirectional;
	RandomAccess, RandomAccess => RandomAccess;
}

/// Category-dispatched traversal between a cursor and an end marker.
///
/// This is the fast-path/slow-path switch shared by all consumers:
/// [`RandomAccess`] cursors with a [`SizedEnd`] jump in constant time,
/// everything else walks one step at a time.
pub trait Traversal<C: Cursor, E: EndMarker<C>>: Category {
	/// Counts the steps from `begin` to `end`.
	fn distance(begin: &C, end: &E) -> usize;

	/// Moves `cursor` forward by up to `n` steps without passing `end`.
	///
	/// Returns the number of steps actually taken.
	fn advance(cursor: &mut C, end: &E, n: usize) -> usize;
}

fn linear_distance<C: Cursor, E: EndMarker<C>>(begin: &C, end: &E) -> usize {
	let mut cursor = begin.clone();
	let mut distance = 0;
	while !end.is_reached_by(&cursor) {
		cursor.increment();
		distance += 1;
	}
	distance
}

fn linear_advance<C: Cursor, E: EndMarker<C>>(cursor: &mut C, end: &E, n: usize) -> usize {
	let mut taken = 0;
	while taken < n && !end.is_reached_by(cursor) {
		cursor.increment();
		taken += 1;
	}
	taken
}

impl<C: Cursor, E: EndMarker<C>> Traversal<C, E> for Forward {
	fn distance(begin: &C, end: &E) -> usize {
		linear_distance(begin, end)
	}

	fn advance(cursor: &mut C, end: &E, n: usize) -> usize {
		linear_advance(cursor, end, n)
	}
}

impl<C: Cursor, E: EndMarker<C>> Traversal<C, E> for Bidirectional {
	fn distance(begin: &C, end: &E) -> usize {
		linear_distance(begin, end)
	}

	fn advance(cursor: &mut C, end: &E, n: usize) -> usize {
		linear_advance(cursor, end, n)
	}
}

impl<C: RandomAccessCursor, E: SizedEnd<C>> Traversal<C, E> for RandomAccess {
	fn distance(begin: &C, end: &E) -> usize {
		usize::try_from(end.distance_from(begin)).unwrap_or(0)
	}

	fn advance(cursor: &mut C, end: &E, n: usize) -> usize {
		let taken = n.min(<Self as Traversal<C, E>>::distance(cursor, end));
		cursor.plus_is(isize::try_from(taken).unwrap_or(isize::MAX));
		taken
	}
}

/// Category-dispatched end marker for a wrapper cursor `D` whose end position needs to know how far it is from the begin.
///
/// [`RandomAccess`] cursors with a [`SizedEnd`] get a real end position, found in constant time.
/// Everything else ends in a [`Sentinel`] carrying the input's end marker, so nothing is traversed up front.
pub trait CheapEnd<C: Cursor, E: EndMarker<C>, D: Cursor>: Category {
	/// The end marker for `D`.
	type Output: EndMarker<D>;

	/// Builds the end of a wrapped sequence that stops after at most `limit` elements of `begin()..end`.
	///
	/// `begin` is only called, and `wrap` only receives the inner end position and its offset from the begin,
	/// if a real end position is produced.
	fn cheap_end(
		begin: impl FnOnce() -> C,
		end: E,
		limit: usize,
		wrap: impl FnOnce(C, usize) -> D,
	) -> <Self as CheapEnd<C, E, D>>::Output;
}

impl<C: Cursor, E: EndMarker<C>, D: SentinelEq<E>> CheapEnd<C, E, D> for Forward {
	type Output = Sentinel<E>;

	fn cheap_end(
		_: impl FnOnce() -> C,
		end: E,
		_: usize,
		_: impl FnOnce(C, usize) -> D,
	) -> Sentinel<E> {
		Sentinel::new(end)
	}
}

impl<C: Cursor, E: EndMarker<C>, D: SentinelEq<E>> CheapEnd<C, E, D> for Bidirectional {
	type Output = Sentinel<E>;

	fn cheap_end(
		_: impl FnOnce() -> C,
		end: E,
		_: usize,
		_: impl FnOnce(C, usize) -> D,
	) -> Sentinel<E> {
		Sentinel::new(end)
	}
}

impl<C: RandomAccessCursor, E: SizedEnd<C>, D: Cursor> CheapEnd<C, E, D> for RandomAccess {
	type Output = Iter<D>;

	fn cheap_end(
		begin: impl FnOnce() -> C,
		end: E,
		limit: usize,
		wrap: impl FnOnce(C, usize) -> D,
	) -> Iter<D> {
		let mut position = begin();
		let offset = min(limit, <Self as Traversal<C, E>>::distance(&position, &end));
		position.plus_is(isize::try_from(offset).unwrap_or(isize::MAX));
		Iter::new(wrap(position, offset))
	}
}
