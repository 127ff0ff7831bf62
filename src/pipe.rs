//! `sequence | adaptor(args)` composition.
//!
//! Adaptor functions like [`filter`](`crate::adaptors::filter`) return a [`Partial`],
//! which holds the extra arguments until `|` binds it to a sequence.
//! The left-hand side may be any [`LazyView`](`crate::LazyView`),
//! or a reference to a slice, array, [`Vec`] or [`VecDeque`].

use alloc::{collections::VecDeque, vec::Vec};
use core::ops::BitOr;

/// Something that turns a sequence of type `I` into a new sequence.
pub trait Adaptor<I> {
	/// The produced sequence.
	type Output;

	/// Applies this adaptor to `iterable`.
	fn call(self, iterable: I) -> Self::Output;
}

/// An [`Adaptor`] waiting for its sequence, as right-hand operand of `|`.
#[must_use = "adaptors do nothing unless applied to a sequence"]
#[derive(Debug, Clone, Copy)]
pub struct Partial<A>(A);

impl<A> Partial<A> {
	/// Holds `adaptor` for later application.
	pub const fn new(adaptor: A) -> Self {
		Self(adaptor)
	}

	/// Applies the held adaptor to `iterable`. `iterable | partial` is sugar for this.
	pub fn apply<I>(self, iterable: I) -> A::Output
	where
		A: Adaptor<I>,
	{
		self.0.call(iterable)
	}
}

macro_rules! pipe_from_container {
	($([$($generics:tt)*] $container:ty;)*) => {$(
		impl<'a, $($generics)*, A: Adaptor<&'a $container>> BitOr<Partial<A>> for &'a $container {
			type Output = A::Output;

			fn bitor(self, adaptor: Partial<A>) -> A::Output {
				adaptor.apply(self)
			}
		}
	)*};
}
pipe_from_container! {
	[T] [T];
	[T, const N: usize] [T; N];
	[T] Vec<T>;
	[T] VecDeque<T>;
}
