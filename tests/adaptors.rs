use lazy_range::{
	adaptors::{cached_reverse, chunks, drop, reverse, take, zip},
	algorithm::{distance, find_if},
	borrowed,
	sources::*,
	Iterable, LazyExt, SizedIterable,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

fn collect<I: IntoIterator>(iterable: I) -> Vec<I::Item> {
	iterable.into_iter().collect()
}

#[test]
fn take_zero_is_empty() {
	let data = vec![1, 2, 3];
	let none = &data | take(0);
	assert!(none.begin() == none.end());
	assert_eq!(none.size(), 0);
	assert!(collect(none).is_empty());
}

#[test]
fn take_then_drop_nothing() {
	let data = vec![1, 2, 3, 4];
	let view = &data | take(3) | drop(0);
	assert_eq!(collect(&view), [&1, &2, &3]);
	assert_eq!(view.size(), 3);
}

#[test]
fn drop_past_the_end() {
	let data = vec![1, 2, 3];
	let view = (&data).drop(10);
	assert!(view.begin() == view.end());
	assert_eq!(view.size(), 0);

	let forward = from_iterator(vec![1, 2, 3]).drop(5);
	assert_eq!(collect(forward), Vec::<i32>::new());
}

#[test]
fn drop_then_take() {
	let view = range(10_u32).drop(3).take(4);
	assert_eq!(collect(view), [3, 4, 5, 6]);
}

#[test]
fn uneven_chunks() {
	let data: Vec<u8> = (1..=8).collect();
	let view = &data | chunks(3);
	assert_eq!(view.size(), 3);
	assert_eq!(
		view.walk()
			.map(|chunk| collect(chunk).into_iter().copied().collect::<Vec<_>>())
			.collect::<Vec<_>>(),
		[vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]
	);
}

#[test]
fn chunks_backwards() {
	let data: Vec<u8> = (1..=8).collect();
	let view = (&data).chunks(3);
	assert_eq!(
		view.walk()
			.rev()
			.map(|chunk| chunk.walk().copied().collect::<Vec<_>>())
			.collect::<Vec<_>>(),
		[vec![7, 8], vec![4, 5, 6], vec![1, 2, 3]]
	);
}

#[test]
fn forward_chunks() {
	let view = from_iterator(1..=5).chunks(2);
	assert_eq!(
		view.walk().map(collect).collect::<Vec<_>>(),
		[vec![1, 2], vec![3, 4], vec![5]]
	);
	assert_eq!(distance(&view), 3);
}

#[test]
fn exact_chunks_step_back_fully() {
	let data = [1, 2, 3, 4];
	let view = (&data).chunks(2);
	let mut it = view.end();
	it.dec();
	assert_eq!(collect(it.get()), [&3, &4]);
	it.dec();
	assert_eq!(collect(it.get()), [&1, &2]);
	assert!(it == view.begin());
}

#[test]
fn random_access_chunks() {
	let data: Vec<u8> = (1..=8).collect();
	let view = (&data).chunks(3);
	let begin = view.begin();
	let end = view.end();

	assert_eq!(end.clone() - begin.clone(), 3);
	assert_eq!(begin.clone() - end.clone(), -3);
	assert_eq!(collect((begin.clone() + 2).get()), [&7, &8]);
	assert!(begin.clone() + 3 == end);
	assert_eq!(collect((end.clone() - 1_isize).get()), [&7, &8]);
	assert_eq!(collect((end - 2_isize).get()), [&4, &5, &6]);
	assert_eq!(collect(begin.at(1)), [&4, &5, &6]);
}

#[test]
fn zip_stops_at_the_shorter() {
	let short = [1, 2];
	let long = vec!['a', 'b', 'c', 'd'];

	let zipped = (&long).zip(&short);
	assert_eq!(zipped.size(), 2);
	assert_eq!(collect(&zipped), [(&'a', &1), (&'b', &2)]);

	let infinite = generate(|| 0).zip(&long);
	assert_eq!(collect(infinite).len(), 4);
}

#[test]
fn zipped_views_keep_piping() {
	let a = [1, 2, 3];
	let b = vec!['x', 'y'];
	let first = (&a | zip(&b)) | take(1);
	assert_eq!(collect(first), [(&1, &'x')]);
}

#[test]
fn zip_reverses_from_the_shorter_end() {
	let long = [1, 2, 3, 4, 5];
	let short = vec!['a', 'b', 'c'];
	let zipped = &long | zip(&short);
	let expected = [(&3, &'c'), (&2, &'b'), (&1, &'a')];

	assert_eq!(collect(borrowed(&zipped) | reverse()), expected);
	assert_eq!(collect(zipped | cached_reverse()), expected);
}

#[test]
fn enumerate_backwards() {
	let letters = ['a', 'b', 'c'];
	let view = (&letters).enumerate();
	assert_eq!(
		view.walk().rev().collect::<Vec<_>>(),
		[(2, &'c'), (1, &'b'), (0, &'a')]
	);
	assert_eq!(view.begin().at(1), (1, &'b'));
}

#[test]
fn enumerate_forward_only() {
	let view = generate_n(|| "x", 2).enumerate();
	assert_eq!(collect(view), [(0, "x"), (1, "x")]);
}

#[test]
fn take_walks_back_over_random_access() {
	let data = vec![1, 2, 3, 4, 5];
	let head = (&data).take(3);
	assert_eq!(head.walk().rev().collect::<Vec<_>>(), [&3, &2, &1]);
	assert_eq!(head.end() - head.begin(), 3);
}

#[test]
fn filter_steps_back_to_matches_only() {
	let data = [1, 2, 3, 4, 5];
	let evens = (&data).filter(|x: &&i32| **x % 2 == 0);
	let mut it = evens.end();
	it.dec();
	assert_eq!(it.get(), &4);
	it.dec();
	assert_eq!(it.get(), &2);
	assert!(it == evens.begin());
}

#[test]
fn take_while_steps_back() {
	let data = [1, 2, 3, 10, 4];
	let view = (&data).take_while(|x: &&i32| **x < 5);
	assert_eq!(collect(&view), [&1, &2, &3]);

	let mut it = view.begin();
	it.inc().inc().inc();
	assert!(it == view.end());
	it.dec();
	assert_eq!(it.get(), &3);
	it.dec();
	assert_eq!(it.get(), &2);
}

#[test]
fn take_while_rejects_the_first() {
	let view = range(5_i32).take_while(|x: &i32| *x < 0);
	assert!(view.begin() == view.end());
}

#[test]
fn reverse_random_access() {
	let data = vec![1, 2, 3, 4, 5];
	let view = (&data).reverse();
	assert_eq!(collect(&view), [&5, &4, &3, &2, &1]);

	let begin = view.begin();
	assert_eq!(view.end() - begin.clone(), 5);
	assert_eq!((begin.clone() + 1).get(), &4);
	assert_eq!(begin.at(4), &1);
	assert!(begin < view.end());
	assert_eq!(view.size(), 5);
}

#[test]
fn reverse_of_take() {
	let data = vec![1, 2, 3, 4, 5];
	assert_eq!(collect((&data).take(2).reverse()), [&2, &1]);
	assert_eq!(collect(range(3_u8).take(10).reverse()), [2, 1, 0]);
}

#[test]
fn reverse_twice_is_forward() {
	let view = range(4_i16).reverse().reverse();
	assert_eq!(collect(view), [0, 1, 2, 3]);
}

#[test]
fn running_sums() {
	let data = [1, 2, 3, 4];
	let sums = (&data).inclusive_scan(0, |total: &i32, x: &i32| total + x);
	assert_eq!(collect(&sums), [1, 3, 6, 10]);
	assert_eq!(sums.size(), 4);

	let empty: [i32; 0] = [];
	let nothing = (&empty).inclusive_scan(100, |total: &i32, x: &i32| total + x);
	assert!(collect(nothing).is_empty());
}

#[test]
fn scan_with_a_different_accumulator() {
	let words = ["a", "bc", "def"];
	let joined = (&words).inclusive_scan(String::new(), |text: &String, word: &&str| {
		let mut text = text.clone();
		text.push_str(word);
		text
	});
	assert_eq!(collect(joined), ["a", "abc", "abcdef"]);
}

#[test]
fn common_ends() {
	let data = vec![1, 2, 3, 10, 4];
	let view = (&data).take_while(|x: &&i32| **x < 5).common();

	let end = view.end();
	let mut it = view.begin();
	let mut count = 0;
	while it != end {
		it.inc();
		count += 1;
	}
	assert_eq!(count, 3);
	assert!(end == it);
	assert_eq!(find_if(&view, |x| **x == 2).get(), &2);
}

#[test]
fn map_random_access() {
	let data = vec![1, 2, 3];
	let view = (&data).map(|x: &i32| x * 10);
	let begin = view.begin();
	assert_eq!(begin.at(2), 30);
	assert_eq!(view.end() - begin, 3);
}

#[test]
fn post_increment_and_decrement() {
	let view = range(5_u32);
	let mut it = view.begin();

	let before = it.post_inc();
	assert_eq!(before.get(), 0);
	assert_eq!(it.get(), 1);

	let before = it.post_dec();
	assert_eq!(before.get(), 1);
	assert_eq!(it.get(), 0);

	it += 3;
	assert_eq!(it.get(), 3);
	it -= 2;
	assert_eq!(it.get(), 1);
	assert!(it > view.begin());
	assert!(it <= view.end());
}

#[test]
fn generator_copies_are_independent() {
	let mut n = 0;
	let counter = generate(move || {
		n += 1;
		n
	});

	let mut a = counter.begin();
	let mut b = a.clone();
	assert_eq!(a.get(), 1);
	a.inc();
	assert_eq!(a.get(), 2);

	assert_eq!(b.get(), 1);
	b.inc();
	assert_eq!(b.get(), 2);
	assert_eq!(a.get(), 2);

	let c = a.clone();
	a.inc();
	assert_eq!(a.get(), 3);
	assert_eq!(c.get(), 2);

	assert_eq!(counter.begin().get(), 1);
	assert_eq!(collect(counter.take(3)), [1, 2, 3]);
}

#[test]
fn repeat_is_random_access() {
	let view = repeat("ab", 3);
	assert_eq!(collect(&view), ["ab", "ab", "ab"]);
	assert_eq!(view.end() - view.begin(), 3);
	assert_eq!(view.begin().at(2), "ab");
}

#[test]
fn subrange_of_a_range() {
	let numbers = range(10_u64);
	let middle = subrange(numbers.begin() + 3, numbers.begin() + 6);
	assert_eq!(middle.size(), 3);
	assert_eq!(collect(middle), [3, 4, 5]);
}

#[test]
#[should_panic = "Chunk size must not be zero"]
fn zero_sized_chunks() {
	let _ = chunks(0);
}

#[test]
#[cfg_attr(not(any(debug_assertions, feature = "assertions")), ignore)]
#[should_panic = "Cannot increment after end"]
fn increment_past_end() {
	let view = range(1_u8);
	let mut it = view.begin();
	it.inc().inc();
}

#[test]
#[cfg_attr(not(any(debug_assertions, feature = "assertions")), ignore)]
#[should_panic = "Cannot decrement before begin"]
fn decrement_before_begin() {
	let data = [1];
	let view = (&data).enumerate();
	view.begin().dec();
}

#[test]
#[cfg_attr(not(any(debug_assertions, feature = "assertions")), ignore)]
#[should_panic = "Cannot decrement before begin"]
fn decrement_before_first_match() {
	let data = [1, 2, 3];
	let evens = (&data).filter(|x: &&i32| **x % 2 == 0);
	evens.begin().dec();
}

#[test]
#[should_panic = "Cannot dereference end"]
fn dereference_generated_end() {
	let view = generate_n(|| 1, 0);
	let _ = view.begin().get();
}
