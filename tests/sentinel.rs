use lazy_range::{
	sources::{generate_while, range},
	Iterable, LazyExt, Sentinel, SizedEnd, SizedIterable, Terminal, DEFAULT_SENTINEL,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn comparison_is_symmetric() {
	let mut counter = 0;
	let below_four = generate_while(move || {
		counter += 1;
		(counter < 4).then_some(counter)
	});

	let mut it = below_four.begin();
	let end = below_four.end();
	let mut seen = vec![];
	while it != end {
		assert!(end != it);
		seen.push(it.get());
		it.inc();
	}
	assert!(it == end);
	assert!(end == it);
	assert_eq!(seen, [1, 2, 3]);
}

#[test]
fn all_sentinels_are_equal() {
	assert!(Sentinel::new(1) == Sentinel::new("one"));
	assert_eq!(DEFAULT_SENTINEL, Sentinel::<()>::default());
	assert!(Sentinel::new(1) <= Sentinel::new(2));
	assert!(Sentinel::new(2) >= Sentinel::new(1));
}

#[test]
fn measurable_zip() {
	let view = range(10_i32).zip(range(4_i32));
	let begin = view.begin();
	let end = view.end();
	assert!(lazy_range::is_sentineled(&view));

	assert_eq!(end.clone() - begin.clone(), 4);
	assert_eq!(begin.clone() - end.clone(), -4);
	assert!(begin < end);
	assert!(end > begin);

	let last = begin.clone() + 3;
	assert!(last < end);
	assert_eq!(last.get(), (3, 3));

	let past = begin + 4;
	assert!(past == end);
	assert!(past >= end);
	assert!(end <= past);
}

#[test]
fn take_measures_the_shorter_bound() {
	let short = range(3_u8).take(10);
	assert_eq!(short.end() - short.begin(), 3);
	assert_eq!(short.size(), 3);
	assert_eq!(short.walk().rev().collect::<Vec<_>>(), [2, 1, 0]);

	let long = range(30_u8).take(10);
	assert_eq!(long.end() - long.begin(), 10);
	assert_eq!(long.end().distance_from(long.begin().cursor()), 10);
	assert_eq!(long.walk().next_back(), Some(9));
}

#[test]
fn sentinels_pass_through_positional_wrappers() {
	let doubled = range(5_u16)
		.zip(range(3_u16))
		.map(|(x, _): (u16, u16)| x * 2);
	assert!(lazy_range::is_sentineled(&doubled));
	assert_eq!(doubled.end() - doubled.begin(), 3);
	assert_eq!(doubled.begin().at(2), 4);
}

#[test]
fn materialized_end_is_a_position() {
	let view = range(8_i64).zip(range(5_i64));
	let begin = view.begin();
	let end = view.end().materialize(begin.cursor());
	let end = lazy_range::Iter::new(end);
	assert!(end == view.end());
	assert_eq!(end - begin, 5);
}
