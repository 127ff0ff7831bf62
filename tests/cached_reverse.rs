use std::cell::Cell;

use lazy_range::{
	adaptors::{cached_reverse, drop, filter, reverse},
	borrowed,
	sources::range,
	Iterable, LazyExt,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn matches_plain_reverse_from_every_start() {
	let is_odd = |x: &u32| x % 2 == 1;
	let odds = range(20_u32) | filter(is_odd);
	let expected: Vec<u32> = (0..20).filter(is_odd).rev().collect();

	for skip in 0..=expected.len() {
		let cached: Vec<_> = (borrowed(&odds) | cached_reverse() | drop(skip))
			.into_iter()
			.collect();
		let plain: Vec<_> = (borrowed(&odds) | reverse() | drop(skip))
			.into_iter()
			.collect();
		assert_eq!(cached, plain);
		assert_eq!(cached, expected[skip..]);
	}
}

#[test]
fn random_access_offsets() {
	let data: Vec<i32> = (0..10).collect();
	let cached = (&data).cached_reverse();
	let plain = (&data).reverse();

	for offset in 0..10 {
		assert_eq!(
			(cached.begin() + offset).get(),
			(plain.begin() + offset).get()
		);
	}
	assert_eq!(cached.end() - cached.begin(), 10);
	assert_eq!((cached.end() - 1_isize).get(), &0);
}

#[test]
fn walks_back_to_forward_order() {
	let odds = range(9_u8).filter(|x: &u8| x % 2 == 1);
	assert_eq!(
		odds.clone().cached_reverse().walk().rev().collect::<Vec<_>>(),
		[1, 3, 5, 7]
	);
	assert_eq!(odds.walk().collect::<Vec<_>>(), [1, 3, 5, 7]);
}

#[test]
fn empty_input() {
	let data: Vec<i32> = vec![];
	let view = (&data).cached_reverse();
	assert!(view.begin() == view.end());
}

#[test]
fn predicate_calls_stay_linear() {
	const N: u32 = 100;
	let calls = Cell::new(0_u32);
	let is_odd = |x: &u32| {
		calls.set(calls.get() + 1);
		x % 2 == 1
	};
	let odds = range(N) | filter(is_odd);

	assert_eq!(odds.walk().count(), 50);
	let forward = calls.replace(0);
	assert_eq!(forward, N);

	assert_eq!(borrowed(&odds).cached_reverse().walk().count(), 50);
	let cached = calls.replace(0);
	assert!(cached <= N + 4, "{cached} predicate calls");
	assert!(forward + cached <= 2 * N + 4);

	assert_eq!(borrowed(&odds).reverse().walk().count(), 50);
	let plain = calls.replace(0);
	assert!(plain > cached, "{plain} <= {cached}");
}
