//! Views that produce elements without wrapping another sequence.

pub mod from_iterator;
pub mod generate;
pub mod range;
pub mod repeat;
pub mod subrange;

pub use self::{
	from_iterator::from_iterator,
	generate::{generate, generate_n, generate_while},
	range::{range, range_between},
	repeat::repeat,
	subrange::subrange,
};
