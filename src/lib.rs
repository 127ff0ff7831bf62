//! Composable lazy sequence adaptors over cursor/sentinel ranges.
//!
//! # Layers
//!
//! - A [`Cursor`] implements a handful of primitives: dereference, increment and equality,
//!   plus decrement ([`BidirectionalCursor`]) or offsets and differences ([`RandomAccessCursor`]).
//! - [`Iter`] derives the full operator set from those, statically.
//! - An [`Iterable`] hands out a begin [`Iter`] and an end,
//!   which is either another [`Iter`] or a cheap [`Sentinel`].
//! - [`adaptors`] wrap iterables into new lazy views.
//!   Their categories never exceed what their inputs support (see [`category`]),
//!   and their inputs are stored by value or by reference depending on whether they are [`LazyView`]s.
//! - `|` composes them: `&data | filter(…) | map(…)`.
//!
//! Nothing is computed before iteration.
//!
//! # Precondition Checks
//!
//! Dereferencing an end position, stepping past either end and comparing cursors of different sequences
//! are bugs. Cursors check for them in debug builds and, with the `"assertions"` feature, in release builds.
//!
//! # Example
//!
//! ```rust
//! use lazy_range::{adaptors::{filter, map, take}, sources::range};
//!
//! let squares: Vec<u32> = (range(10_u32) | filter(|x: &u32| x % 2 == 0) | map(|x: u32| x * x) | take(3))
//! 	.into_iter()
//! 	.collect();
//! assert_eq!(squares, [0, 4, 16]);
//! ```
#![no_std]
#![doc(html_root_url = "https://docs.rs/lazy-range/0.0.1")]
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::semicolon_if_nothing_returned)]

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
mod readme {}

extern crate alloc;

#[macro_use]
mod assert;
#[macro_use]
mod ref_or_view;

pub mod adaptors;
pub mod algorithm;
pub mod category;
mod cursor;
mod iter;
mod iterable;
mod pipe;
mod sentinel;
pub mod sources;

pub use crate::{
	adaptors::LazyExt,
	category::{Category, CategoryKind},
	cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, SentinelDifference, SentinelEq},
	iter::Iter,
	iterable::{category_of, is_sentineled, Iterable, SizedIterable, Walk},
	pipe::{Adaptor, Partial},
	ref_or_view::{
		borrowed, copied, Borrowed, Copied, DequeCursor, IntoView, LazyView, RefOrView,
		SharedCursor, SliceCursor,
	},
	sentinel::{
		DefaultSentinel, EndMarker, LiftEnd, Sentinel, SizedEnd, Terminal, DEFAULT_SENTINEL,
	},
};
