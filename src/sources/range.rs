//! Counting sequences.

use crate::{
	category::RandomAccess,
	cursor::{BidirectionalCursor, Cursor, RandomAccessCursor},
	iter::Iter,
	iterable::{Iterable, SizedIterable},
};

/// An integer type that [`range`] can count with.
pub trait Step: Copy + Ord {
	/// Zero.
	const ZERO: Self;

	/// `self + offset`.
	#[must_use]
	fn offset(self, offset: isize) -> Self;

	/// `self - origin` as a step count, saturating.
	fn steps_from(self, origin: Self) -> isize;
}

macro_rules! step {
	($($int:ty),*$(,)?) => {$(
		#[allow(
			clippy::cast_possible_truncation,
			clippy::cast_possible_wrap,
			clippy::cast_sign_loss,
		)]
		impl Step for $int {
			const ZERO: Self = 0;

			fn offset(self, offset: isize) -> Self {
				(self as i128 + offset as i128) as Self
			}

			fn steps_from(self, origin: Self) -> isize {
				let steps = self as i128 - origin as i128;
				steps.clamp(isize::MIN as i128, isize::MAX as i128) as isize
			}
		}
	)*};
}
step!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// The integers `start..stop`. See [`range`] and [`range_between`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug, Clone, Copy)]
pub struct Range<N> {
	start: N,
	stop: N,
}

/// The integers from zero up to, but excluding, `stop`.
pub fn range<N: Step>(stop: N) -> Range<N> {
	range_between(N::ZERO, stop)
}

/// The integers from `start` up to, but excluding, `stop`. Empty if `stop < start`.
pub fn range_between<N: Step>(start: N, stop: N) -> Range<N> {
	Range {
		start,
		stop: stop.max(start),
	}
}

/// The cursor of [`Range`].
#[derive(Debug, Clone, Copy)]
pub struct RangeCursor<N> {
	value: N,
	start: N,
	stop: N,
}

impl<N: Step> Cursor for RangeCursor<N> {
	type Item = N;
	type Category = RandomAccess;

	fn dereference(&self) -> N {
		assert_dereferenceable!(self.value < self.stop);
		self.value
	}

	fn increment(&mut self) {
		assert_incrementable!(self.value < self.stop);
		self.value = self.value.offset(1);
	}

	fn eq(&self, other: &Self) -> bool {
		assert_compatible!(self.start == other.start && self.stop == other.stop);
		self.value == other.value
	}
}

impl<N: Step> BidirectionalCursor for RangeCursor<N> {
	fn decrement(&mut self) {
		assert_decrementable!(self.value > self.start);
		self.value = self.value.offset(-1);
	}
}

impl<N: Step> RandomAccessCursor for RangeCursor<N> {
	fn plus_is(&mut self, offset: isize) {
		let value = self.value.offset(offset);
		assert_incrementable!(value <= self.stop);
		assert_decrementable!(value >= self.start);
		self.value = value;
	}

	fn difference(&self, other: &Self) -> isize {
		assert_compatible!(self.start == other.start && self.stop == other.stop);
		self.value.steps_from(other.value)
	}
}

impl<N: Step> Iterable for Range<N> {
	type Cursor = RangeCursor<N>;
	type End = Iter<RangeCursor<N>>;

	fn begin(&self) -> Iter<Self::Cursor> {
		Iter::new(RangeCursor {
			value: self.start,
			start: self.start,
			stop: self.stop,
		})
	}

	fn end(&self) -> Self::End {
		Iter::new(RangeCursor {
			value: self.stop,
			start: self.start,
			stop: self.stop,
		})
	}
}

impl<N: Step> SizedIterable for Range<N> {
	fn size(&self) -> usize {
		usize::try_from(self.stop.steps_from(self.start)).unwrap_or(0)
	}
}

lazy_view!([N] Range<N>);
