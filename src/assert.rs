//! Cursor precondition checks.
//!
//! These are active in debug builds and, with the `"assertions"` feature, in release builds too.
//! A failed check is a bug in the calling code and panics.

/// Whether cursor preconditions are checked in this build.
pub(crate) const CHECKED: bool = cfg!(any(debug_assertions, feature = "assertions"));

macro_rules! assert_incrementable {
	($cond:expr) => {
		if $crate::assert::CHECKED {
			assert!($cond, "Cannot increment after end");
		}
	};
}

macro_rules! assert_decrementable {
	($cond:expr) => {
		if $crate::assert::CHECKED {
			assert!($cond, "Cannot decrement before begin");
		}
	};
}

macro_rules! assert_dereferenceable {
	($cond:expr) => {
		if $crate::assert::CHECKED {
			assert!($cond, "Cannot dereference end");
		}
	};
}

macro_rules! assert_compatible {
	($cond:expr) => {
		if $crate::assert::CHECKED {
			assert!($cond, "Incompatible iterators");
		}
	};
}

/// For cursors that have no value to hand out at their end position, regardless of build configuration.
#[cold]
#[track_caller]
pub(crate) fn dereferenced_end() -> ! {
	panic!("Cannot dereference end")
}
