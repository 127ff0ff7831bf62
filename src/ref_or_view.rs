//! Storage decisions for wrapped sequences.
//!
//! Adaptors store their input through [`IntoView`]:
//! composed views (anything [`LazyView`]) are moved in by value, since they are usually temporaries in a pipe chain,
//! while containers are only borrowed, which ties the adaptor to the container's lifetime instead of copying it.
//!
//! [`borrowed`] and [`copied`] override that decision.

use alloc::{collections::VecDeque, rc::Rc, vec::Vec};
use core::ptr;

use tap::Pipe;

use crate::{
	category::RandomAccess,
	cursor::{offset_index, signed_difference, BidirectionalCursor, Cursor, RandomAccessCursor},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
};

/// Marks a type as a composed view: an [`Iterable`] that's cheap to move and stored by value when wrapped.
pub trait LazyView: Iterable {}

/// Implements [`LazyView`], `|`-composition and [`IntoIterator`] (by value and by reference) for a view type.
macro_rules! lazy_view {
	([$($generics:tt)*] $view:ty) => {
		impl<$($generics)*> $crate::LazyView for $view where $view: $crate::Iterable {}

		impl<$($generics)*, Adp: $crate::Adaptor<$view>> ::core::ops::BitOr<$crate::Partial<Adp>> for $view {
			type Output = Adp::Output;

			fn bitor(self, adaptor: $crate::Partial<Adp>) -> Adp::Output {
				adaptor.apply(self)
			}
		}

		impl<$($generics)*> ::core::iter::IntoIterator for $view
		where
			$view: $crate::Iterable,
		{
			type Item = <<$view as $crate::Iterable>::Cursor as $crate::Cursor>::Item;
			type IntoIter = $crate::Walk<
				<$view as $crate::Iterable>::Cursor,
				<$view as $crate::Iterable>::End,
			>;

			fn into_iter(self) -> Self::IntoIter {
				let (begin, end) = $crate::Iterable::into_bounds(self);
				$crate::Walk::new(begin, end)
			}
		}

		impl<'view, $($generics)*> ::core::iter::IntoIterator for &'view $view
		where
			$view: $crate::Iterable,
		{
			type Item = <<$view as $crate::Iterable>::Cursor as $crate::Cursor>::Item;
			type IntoIter = $crate::Walk<
				<$view as $crate::Iterable>::Cursor,
				<$view as $crate::Iterable>::End,
			>;

			fn into_iter(self) -> Self::IntoIter {
				$crate::Iterable::walk(self)
			}
		}
	};
}

/// Anything that can be wrapped by an adaptor.
///
/// [`LazyView`]s become themselves, containers become [`Borrowed`].
pub trait IntoView {
	/// How the value is stored inside the adaptor.
	type View: Iterable;

	/// Converts `self` for storage.
	fn into_view(self) -> Self::View;
}

/// The storage type an adaptor uses for an input of type `T`.
pub type RefOrView<T> = <T as IntoView>::View;

impl<V: LazyView> IntoView for V {
	type View = V;

	fn into_view(self) -> V {
		self
	}
}

impl<'a, T> IntoView for &'a [T] {
	type View = Borrowed<'a, [T]>;

	fn into_view(self) -> Self::View {
		Borrowed(self)
	}
}

impl<'a, T, const N: usize> IntoView for &'a [T; N] {
	type View = Borrowed<'a, [T; N]>;

	fn into_view(self) -> Self::View {
		Borrowed(self)
	}
}

impl<'a, T> IntoView for &'a Vec<T> {
	type View = Borrowed<'a, Vec<T>>;

	fn into_view(self) -> Self::View {
		Borrowed(self)
	}
}

impl<'a, T> IntoView for &'a VecDeque<T> {
	type View = Borrowed<'a, VecDeque<T>>;

	fn into_view(self) -> Self::View {
		Borrowed(self)
	}
}

/// A view that always refers to its sequence instead of owning it.
#[derive(Debug)]
pub struct Borrowed<'a, S: ?Sized>(&'a S);

impl<S: ?Sized> Clone for Borrowed<'_, S> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<S: ?Sized> Copy for Borrowed<'_, S> {}

impl<'a, S: ?Sized> Borrowed<'a, S> {
	/// The referenced sequence.
	#[must_use]
	pub const fn get(self) -> &'a S {
		self.0
	}
}

/// Wraps `sequence` by reference, even if it is a [`LazyView`] that would otherwise be moved.
pub const fn borrowed<S: ?Sized>(sequence: &S) -> Borrowed<'_, S> {
	Borrowed(sequence)
}

lazy_view!(['a, S: ?Sized] Borrowed<'a, S>);

/// A [`RandomAccessCursor`] over a slice.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
	slice: &'a [T],
	index: usize,
}

impl<T> Clone for SliceCursor<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> SliceCursor<'a, T> {
	/// A cursor at `index` in `slice`.
	#[must_use]
	pub const fn new(slice: &'a [T], index: usize) -> Self {
		Self { slice, index }
	}

	/// The current index.
	#[must_use]
	pub const fn index(&self) -> usize {
		self.index
	}
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
	type Item = &'a T;
	type Category = RandomAccess;

	fn dereference(&self) -> &'a T {
		match self.slice.get(self.index) {
			Some(item) => item,
			None => crate::assert::dereferenced_end(),
		}
	}

	fn increment(&mut self) {
		assert_incrementable!(self.index < self.slice.len());
		self.index += 1;
	}

	fn eq(&self, other: &Self) -> bool {
		assert_compatible!(ptr::eq(self.slice, other.slice));
		self.index == other.index
	}
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
	fn decrement(&mut self) {
		assert_decrementable!(self.index > 0);
		self.index -= 1;
	}
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
	fn plus_is(&mut self, offset: isize) {
		let index = offset_index(self.index, offset).filter(|&index| index <= self.slice.len());
		assert_incrementable!(index.is_some());
		self.index = index.unwrap_or(self.slice.len());
	}

	fn difference(&self, other: &Self) -> isize {
		assert_compatible!(ptr::eq(self.slice, other.slice));
		signed_difference(self.index, other.index)
	}
}

fn slice_bounds<T>(slice: &[T]) -> (Iter<SliceCursor<'_, T>>, Iter<SliceCursor<'_, T>>) {
	(
		SliceCursor::new(slice, 0).pipe(Iter::new),
		SliceCursor::new(slice, slice.len()).pipe(Iter::new),
	)
}

macro_rules! slice_iterable {
	($([$($generics:tt)*] $container:ty;)*) => {$(
		impl<'a, $($generics)*> Iterable for Borrowed<'a, $container> {
			type Cursor = SliceCursor<'a, T>;
			type End = Iter<SliceCursor<'a, T>>;

			fn begin(&self) -> Iter<Self::Cursor> {
				slice_bounds(&self.0[..]).0
			}

			fn end(&self) -> Self::End {
				slice_bounds(&self.0[..]).1
			}
		}

		impl<'a, $($generics)*> SizedIterable for Borrowed<'a, $container> {
			fn size(&self) -> usize {
				self.0.len()
			}
		}
	)*};
}
slice_iterable! {
	[T] [T];
	[T, const N: usize] [T; N];
	[T] Vec<T>;
}

/// A [`RandomAccessCursor`] over a [`VecDeque`].
#[derive(Debug)]
pub struct DequeCursor<'a, T> {
	deque: &'a VecDeque<T>,
	index: usize,
}

impl<T> Clone for DequeCursor<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<T> Copy for DequeCursor<'_, T> {}

impl<'a, T> Cursor for DequeCursor<'a, T> {
	type Item = &'a T;
	type Category = RandomAccess;

	fn dereference(&self) -> &'a T {
		match self.deque.get(self.index) {
			Some(item) => item,
			None => crate::assert::dereferenced_end(),
		}
	}

	fn increment(&mut self) {
		assert_incrementable!(self.index < self.deque.len());
		self.index += 1;
	}

	fn eq(&self, other: &Self) -> bool {
		assert_compatible!(ptr::eq(self.deque, other.deque));
		self.index == other.index
	}
}

impl<T> BidirectionalCursor for DequeCursor<'_, T> {
	fn decrement(&mut self) {
		assert_decrementable!(self.index > 0);
		self.index -= 1;
	}
}

impl<T> RandomAccessCursor for DequeCursor<'_, T> {
	fn plus_is(&mut self, offset: isize) {
		let index = offset_index(self.index, offset).filter(|&index| index <= self.deque.len());
		assert_incrementable!(index.is_some());
		self.index = index.unwrap_or(self.deque.len());
	}

	fn difference(&self, other: &Self) -> isize {
		assert_compatible!(ptr::eq(self.deque, other.deque));
		signed_difference(self.index, other.index)
	}
}

impl<'a, T> Iterable for Borrowed<'a, VecDeque<T>> {
	type Cursor = DequeCursor<'a, T>;
	type End = Iter<DequeCursor<'a, T>>;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(DequeCursor {
			deque: self.0,
			index: 0,
		})
	}

	fn end(&self) -> Self::End {
		Iter::new(DequeCursor {
			deque: self.0,
			index: self.0.len(),
		})
	}
}

impl<T> SizedIterable for Borrowed<'_, VecDeque<T>> {
	fn size(&self) -> usize {
		self.0.len()
	}
}

/// Referencing a view is the escape hatch for views that are expensive to move or clone.
impl<'a, V: LazyView> Iterable for Borrowed<'a, V> {
	type Cursor = V::Cursor;
	type End = V::End;

	fn begin(&self) -> Iter<Self::Cursor> {
		self.0.begin()
	}

	fn end(&self) -> Self::End {
		self.0.end()
	}
}

impl<V: LazyView + SizedIterable> SizedIterable for Borrowed<'_, V> {
	fn size(&self) -> usize {
		self.0.size()
	}
}

/// A view that owns a shared copy of its elements.
///
/// Cloning the view or its cursors only bumps a reference count.
#[derive(Debug)]
pub struct Copied<T> {
	items: Rc<[T]>,
}

impl<T> Clone for Copied<T> {
	fn clone(&self) -> Self {
		Self {
			items: Rc::clone(&self.items),
		}
	}
}

/// Copies `items` into a [`Copied`] view, decoupling it from the source's lifetime.
pub fn copied<I: IntoIterator>(items: I) -> Copied<I::Item> {
	Copied {
		items: items.into_iter().collect(),
	}
}

lazy_view!([T] Copied<T>);

/// A [`RandomAccessCursor`] over a [`Copied`] view, yielding clones.
#[derive(Debug)]
pub struct SharedCursor<T> {
	items: Rc<[T]>,
	index: usize,
}

impl<T> Clone for SharedCursor<T> {
	fn clone(&self) -> Self {
		Self {
			items: Rc::clone(&self.items),
			index: self.index,
		}
	}
}

impl<T: Clone> Cursor for SharedCursor<T> {
	type Item = T;
	type Category = RandomAccess;

	fn dereference(&self) -> T {
		match self.items.get(self.index) {
			Some(item) => item.clone(),
			None => crate::assert::dereferenced_end(),
		}
	}

	fn increment(&mut self) {
		assert_incrementable!(self.index < self.items.len());
		self.index += 1;
	}

	fn eq(&self, other: &Self) -> bool {
		assert_compatible!(Rc::ptr_eq(&self.items, &other.items));
		self.index == other.index
	}
}

impl<T: Clone> BidirectionalCursor for SharedCursor<T> {
	fn decrement(&mut self) {
		assert_decrementable!(self.index > 0);
		self.index -= 1;
	}
}

impl<T: Clone> RandomAccessCursor for SharedCursor<T> {
	fn plus_is(&mut self, offset: isize) {
		let index = offset_index(self.index, offset).filter(|&index| index <= self.items.len());
		assert_incrementable!(index.is_some());
		self.index = index.unwrap_or(self.items.len());
	}

	fn difference(&self, other: &Self) -> isize {
		assert_compatible!(Rc::ptr_eq(&self.items, &other.items));
		signed_difference(self.index, other.index)
	}
}

impl<T: Clone> Iterable for Copied<T> {
	type Cursor = SharedCursor<T>;
	type End = Iter<SharedCursor<T>>;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(SharedCursor {
			items: Rc::clone(&self.items),
			index: 0,
		})
	}

	fn end(&self) -> Self::End {
		Iter::new(SharedCursor {
			items: Rc::clone(&self.items),
			index: self.items.len(),
		})
	}

	fn into_bounds(self) -> (Iter<Self::Cursor>, Self::End) {
		let end = self.end();
		let begin = SharedCursor {
			items: self.items,
			index: 0,
		};
		(Iter::new(begin), end)
	}
}

impl<T: Clone> SizedIterable for Copied<T> {
	fn size(&self) -> usize {
		self.items.len()
	}
}
