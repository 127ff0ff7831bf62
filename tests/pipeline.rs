use std::cell::Cell;

use lazy_range::{
	adaptors::{chunks, enumerate, filter, map, take},
	category_of,
	sources::{generate, range},
	CategoryKind, Iterable,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn calls_only_what_it_needs() {
	let predicate_calls = Cell::new(0);
	let map_calls = Cell::new(0);

	let is_even = |x: &u32| {
		predicate_calls.set(predicate_calls.get() + 1);
		x % 2 == 0
	};
	let square = |x: u32| {
		map_calls.set(map_calls.get() + 1);
		x * x
	};

	let pipeline = range(10_u32) | filter(is_even) | map(square) | take(3);

	assert_eq!(predicate_calls.get(), 0);
	assert_eq!(map_calls.get(), 0);

	let collected: Vec<_> = pipeline.into_iter().collect();
	assert_eq!(collected, [0, 4, 16]);
	assert_eq!(predicate_calls.get(), 7);
	assert_eq!(map_calls.get(), 3);
}

#[test]
fn positional_wrappers_do_not_rescan() {
	let data: Vec<u32> = (0..100).collect();
	let calls = Cell::new(0);
	let is_even = |x: &&u32| {
		calls.set(calls.get() + 1);
		**x % 2 == 0
	};

	let numbered = &data | filter(is_even) | enumerate();
	assert_eq!(calls.get(), 0);
	assert_eq!(numbered.into_iter().last(), Some((49, &98)));
	assert_eq!(calls.replace(0), 100);

	let grouped = &data | filter(is_even) | chunks(8);
	assert_eq!(grouped.into_iter().count(), 7);
	assert_eq!(calls.replace(0), 100);
}

#[test]
fn generator_runs_once_per_element() {
	let calls = Cell::new(0);
	let counter = generate(|| {
		calls.set(calls.get() + 1);
		calls.get()
	});

	let _ = counter.begin();
	assert_eq!(calls.get(), 0);

	let first: Vec<_> = (counter | take(3)).into_iter().collect();
	assert_eq!(first, [1, 2, 3]);
	assert_eq!(calls.get(), 3);
}

#[test]
fn pipeline_category() {
	let pipeline = range(10_u32) | filter(|x: &u32| x % 3 == 0) | map(|x: u32| x + 1);
	assert_eq!(category_of(&pipeline), CategoryKind::Bidirectional);
	assert_eq!(pipeline.walk().rev().collect::<Vec<_>>(), [10, 7, 4, 1]);
}

#[test]
fn partially_consumed_walks_resume() {
	let pipeline = range(6_u8) | map(|x: u8| x * 10);
	let mut walk = pipeline.walk();
	assert_eq!(walk.next(), Some(0));
	assert_eq!(walk.next_back(), Some(50));

	let (begin, end) = walk.into_bounds();
	assert_eq!(end - begin, 4);
}
