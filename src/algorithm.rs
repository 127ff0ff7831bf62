//! Consumers of the begin/end protocol.
//!
//! Each of these picks its strategy through [`Traversal`]:
//! random-access cursors with a measurable end jump, everything else walks.

use crate::{
	category::Traversal,
	cursor::Cursor,
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	sentinel::EndMarker,
};

/// The category of cursors of type `C`.
pub type CategoryOf<C> = <C as Cursor>::Category;

/// The number of steps from `iterable`'s begin to its end.
///
/// Constant-time for random-access sequences with a measurable end, linear otherwise.
pub fn distance<I: Iterable + ?Sized>(iterable: &I) -> usize
where
	CategoryOf<I::Cursor>: Traversal<I::Cursor, I::End>,
{
	<CategoryOf<I::Cursor> as Traversal<I::Cursor, I::End>>::distance(
		iterable.begin().cursor(),
		&iterable.end(),
	)
}

/// The length of `iterable`, computed by [`distance`] because no cheaper size is known.
///
/// Prefer [`SizedIterable::size`] where available, which [`eager_size_of_sized`] uses.
pub fn eager_size<I: Iterable + ?Sized>(iterable: &I) -> usize
where
	CategoryOf<I::Cursor>: Traversal<I::Cursor, I::End>,
{
	distance(iterable)
}

/// The length of a [`SizedIterable`], without traversal.
pub fn eager_size_of_sized<I: SizedIterable + ?Sized>(iterable: &I) -> usize {
	iterable.size()
}

/// `it` moved forward by up to `n` steps, stopping at `end`.
pub fn next_n<C: Cursor, E: EndMarker<C>>(mut it: Iter<C>, end: &E, n: usize) -> Iter<C>
where
	CategoryOf<C>: Traversal<C, E>,
{
	advance(&mut it, end, n);
	it
}

/// Moves `it` forward by up to `n` steps, stopping at `end`.
///
/// Returns the number of steps actually taken.
pub fn advance<C: Cursor, E: EndMarker<C>>(it: &mut Iter<C>, end: &E, n: usize) -> usize
where
	CategoryOf<C>: Traversal<C, E>,
{
	<CategoryOf<C> as Traversal<C, E>>::advance(it.cursor_mut(), end, n)
}

/// The first position in `iterable` whose element satisfies `predicate`, or its end position.
///
/// This is the real end iterator only when `I::End` is one. For sentineled sequences, compare against [`Iterable::end`].
pub fn find_if<I: Iterable + ?Sized>(
	iterable: &I,
	mut predicate: impl FnMut(&<I::Cursor as Cursor>::Item) -> bool,
) -> Iter<I::Cursor> {
	let mut it = iterable.begin();
	let end = iterable.end();
	while !end.is_reached_by(it.cursor()) && !predicate(&it.get()) {
		it.inc();
	}
	it
}

#[cfg(test)]
mod tests {
	use alloc::vec;

	use super::*;
	use crate::ref_or_view::IntoView;

	#[test]
	fn find_in_vec() {
		let data = vec![1, 3, 4, 5];
		let view = (&data).into_view();
		let found = find_if(&view, |&&x| x % 2 == 0);
		assert_eq!(*found.get(), 4);
		assert_eq!(found - view.begin(), 2);
	}

	#[test]
	fn missing_is_end() {
		let data = [1, 3];
		let view = (&data).into_view();
		assert!(find_if(&view, |&&x| x > 10) == view.end());
	}

	#[test]
	fn bounded_advance() {
		let data = [1, 2, 3];
		let view = (&data).into_view();
		let mut it = view.begin();
		assert_eq!(advance(&mut it, &view.end(), 10), 3);
		assert!(it == view.end());
		assert_eq!(distance(&view), 3);
		assert_eq!(eager_size(&view), eager_size_of_sized(&view));
	}
}
