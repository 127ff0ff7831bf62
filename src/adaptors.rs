//! Lazy sequence transforms.
//!
//! Every transform here comes in two forms:
//!
//! - a function returning a [`Partial`] for `sequence | transform(args)` composition, like [`filter`],
//! - a method on [`LazyExt`] taking the sequence directly, like [`LazyExt::filter`].
//!
//! Each one is an [`Adaptor`] producing an [`Iterable`](`crate::Iterable`) view with its own cursor type,
//! and none of them needs anything from the core that other adaptors don't also use.

pub mod cached_reverse;
pub mod chunks;
pub mod common;
pub mod drop;
pub mod enumerate;
pub mod filter;
pub mod inclusive_scan;
pub mod map;
pub mod reverse;
pub mod take;
pub mod take_while;
pub mod zip;

use crate::{
	pipe::{Adaptor, Partial},
	ref_or_view::IntoView,
};

use self::{
	cached_reverse::{CachedReverse, CachedReverseAdaptor},
	chunks::{Chunks, ChunksAdaptor},
	common::{Common, CommonAdaptor},
	drop::{DropAdaptor, Dropped},
	enumerate::{Enumerate, EnumerateAdaptor},
	filter::{Filter, FilterAdaptor},
	inclusive_scan::{InclusiveScan, InclusiveScanAdaptor},
	map::{Map, MapAdaptor},
	reverse::{Reverse, ReverseAdaptor},
	take::{Take, TakeAdaptor},
	take_while::{TakeWhile, TakeWhileAdaptor},
	zip::{Zip, ZipAdaptor},
};

/// Applies `f` to each element. See [`Map`].
pub const fn map<F>(f: F) -> Partial<MapAdaptor<F>> {
	Partial::new(MapAdaptor(f))
}

/// Keeps the elements `predicate` accepts. See [`Filter`].
pub const fn filter<P>(predicate: P) -> Partial<FilterAdaptor<P>> {
	Partial::new(FilterAdaptor(predicate))
}

/// Keeps the first `n` elements. See [`Take`].
pub const fn take(n: usize) -> Partial<TakeAdaptor> {
	Partial::new(TakeAdaptor(n))
}

/// Skips the first `n` elements. See [`Dropped`].
pub const fn drop(n: usize) -> Partial<DropAdaptor> {
	Partial::new(DropAdaptor(n))
}

/// Keeps elements until `predicate` first rejects one. See [`TakeWhile`].
pub const fn take_while<P>(predicate: P) -> Partial<TakeWhileAdaptor<P>> {
	Partial::new(TakeWhileAdaptor(predicate))
}

/// Pairs elements with their index. See [`Enumerate`].
pub const fn enumerate() -> Partial<EnumerateAdaptor> {
	Partial::new(EnumerateAdaptor)
}

/// Pairs elements with those of `other`. See [`Zip`].
pub fn zip<B: IntoView>(other: B) -> Partial<ZipAdaptor<B::View>> {
	Partial::new(ZipAdaptor(other.into_view()))
}

/// Splits into chunks of `size` elements. See [`Chunks`].
///
/// # Panics
///
/// Iff `size` is zero.
pub fn chunks(size: usize) -> Partial<ChunksAdaptor> {
	Partial::new(ChunksAdaptor::new(size))
}

/// Iterates back to front. See [`Reverse`].
pub const fn reverse() -> Partial<ReverseAdaptor> {
	Partial::new(ReverseAdaptor)
}

/// Iterates back to front, caching stepped-back positions. See [`CachedReverse`].
pub const fn cached_reverse() -> Partial<CachedReverseAdaptor> {
	Partial::new(CachedReverseAdaptor)
}

/// Gives begin and end the same type. See [`Common`].
pub const fn common() -> Partial<CommonAdaptor> {
	Partial::new(CommonAdaptor)
}

/// Running accumulation starting from `init`. See [`InclusiveScan`].
pub const fn inclusive_scan<T, F>(init: T, f: F) -> Partial<InclusiveScanAdaptor<T, F>> {
	Partial::new(InclusiveScanAdaptor { init, f })
}

/// Method-call forms of the transforms in this module, for anything that can be wrapped.
#[allow(clippy::module_name_repetitions)]
pub trait LazyExt: IntoView + Sized {
	/// See [`map()`].
	fn map<F>(self, f: F) -> Map<Self::View, F> {
		MapAdaptor(f).call(self)
	}

	/// See [`filter()`].
	fn filter<P>(self, predicate: P) -> Filter<Self::View, P> {
		FilterAdaptor(predicate).call(self)
	}

	/// See [`take()`].
	fn take(self, n: usize) -> Take<Self::View> {
		TakeAdaptor(n).call(self)
	}

	/// See [`drop()`].
	fn drop(self, n: usize) -> Dropped<Self::View> {
		DropAdaptor(n).call(self)
	}

	/// See [`take_while()`].
	fn take_while<P>(self, predicate: P) -> TakeWhile<Self::View, P> {
		TakeWhileAdaptor(predicate).call(self)
	}

	/// See [`enumerate()`].
	fn enumerate(self) -> Enumerate<Self::View> {
		EnumerateAdaptor.call(self)
	}

	/// See [`zip()`].
	fn zip<B: IntoView>(self, other: B) -> Zip<Self::View, B::View> {
		ZipAdaptor(other.into_view()).call(self)
	}

	/// See [`chunks()`].
	///
	/// # Panics
	///
	/// Iff `size` is zero.
	fn chunks(self, size: usize) -> Chunks<Self::View> {
		ChunksAdaptor::new(size).call(self)
	}

	/// See [`reverse()`].
	fn reverse(self) -> Reverse<Self::View> {
		ReverseAdaptor.call(self)
	}

	/// See [`cached_reverse()`].
	fn cached_reverse(self) -> CachedReverse<Self::View> {
		CachedReverseAdaptor.call(self)
	}

	/// See [`common()`].
	fn common(self) -> Common<Self::View> {
		CommonAdaptor.call(self)
	}

	/// See [`inclusive_scan()`].
	fn inclusive_scan<T, F>(self, init: T, f: F) -> InclusiveScan<Self::View, T, F> {
		InclusiveScanAdaptor { init, f }.call(self)
	}
}
impl<T: IntoView> LazyExt for T {}
