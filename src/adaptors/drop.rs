//! Everything after the first `n` elements.

use crate::{
	algorithm::{advance, CategoryOf},
	category::Traversal,
	iter::Iter,
	iterable::{Iterable, SizedIterable},
	pipe::Adaptor,
	ref_or_view::IntoView,
};

/// Skips the first `n` elements when iteration begins.
///
/// This reuses its input's cursors and end, so category and end kind are unchanged.
/// Random-access inputs skip in constant time.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone)]
pub struct Dropped<V> {
	inner: V,
	n: usize,
}

/// The [`Adaptor`] behind [`drop`](`crate::adaptors::drop`).
#[derive(Debug, Clone, Copy)]
pub struct DropAdaptor(pub(crate) usize);

impl<I: IntoView> Adaptor<I> for DropAdaptor {
	type Output = Dropped<I::View>;

	fn call(self, iterable: I) -> Self::Output {
		Dropped {
			inner: iterable.into_view(),
			n: self.0,
		}
	}
}

impl<V: Iterable> Iterable for Dropped<V>
where
	CategoryOf<V::Cursor>: Traversal<V::Cursor, V::End>,
{
	type Cursor = V::Cursor;
	type End = V::End;

	fn begin(&self) -> Iter<Self::Cursor> {
		let mut begin = self.inner.begin();
		advance(&mut begin, &self.inner.end(), self.n);
		begin
	}

	fn end(&self) -> Self::End {
		self.inner.end()
	}
}

impl<V: SizedIterable> SizedIterable for Dropped<V>
where
	Self: Iterable,
{
	fn size(&self) -> usize {
		self.inner.size().saturating_sub(self.n)
	}
}

lazy_view!([V] Dropped<V>);
