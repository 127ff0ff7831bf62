#![cfg(not(target_arch = "wasm32"))]

use lazy_range::{
	adaptors::{cached_reverse, chunks, drop, filter, reverse, take, zip},
	algorithm::distance,
	borrowed,
	sources::from_iterator,
	Iterable, SizedIterable,
};
use proptest::prelude::*;

proptest! {
	#![proptest_config(ProptestConfig::with_cases(2_000))]

	#[test]
	fn take_and_drop_split(data in any::<Vec<u8>>(), n in 0..64_usize) {
		let head: Vec<u8> = (&data | take(n)).into_iter().copied().collect();
		let tail: Vec<u8> = (&data | drop(n)).into_iter().copied().collect();

		prop_assert_eq!(&head[..], &data[..n.min(data.len())]);
		prop_assert_eq!(&tail[..], &data[n.min(data.len())..]);
		prop_assert_eq!((&data | take(n)).size(), head.len());
		prop_assert_eq!((&data | drop(n)).size(), tail.len());
	}

	#[test]
	fn zip_has_the_shorter_length(a in any::<Vec<i16>>(), b in any::<Vec<char>>()) {
		let zipped = &a | zip(&b);
		let pairs: Vec<_> = zipped.walk().collect();

		prop_assert_eq!(pairs.len(), a.len().min(b.len()));
		prop_assert_eq!(zipped.size(), pairs.len());
		prop_assert_eq!(distance(&zipped), pairs.len());
		prop_assert_eq!(pairs, a.iter().zip(&b).collect::<Vec<_>>());
	}

	#[test]
	fn chunks_flatten_to_their_input(data in any::<Vec<u8>>(), size in 1..10_usize) {
		let view = &data | chunks(size);
		let nested: Vec<Vec<u8>> = view
			.walk()
			.map(|chunk| chunk.into_iter().copied().collect())
			.collect();

		prop_assert_eq!(nested.len(), view.size());
		prop_assert_eq!(view.end() - view.begin(), isize::try_from(nested.len()).unwrap());
		prop_assert!(nested.iter().all(|chunk| !chunk.is_empty() && chunk.len() <= size));
		prop_assert_eq!(nested.concat(), data.clone());

		let backwards: Vec<Vec<u8>> = view
			.walk()
			.rev()
			.map(|chunk| chunk.into_iter().copied().collect())
			.collect();
		prop_assert_eq!(backwards.into_iter().rev().collect::<Vec<_>>(), nested);
	}

	#[test]
	fn filter_reverses_like_std(data in any::<Vec<u8>>(), divisor in 1..5_u8) {
		let divisible = |x: &&u8| **x % divisor == 0;
		let view = &data | filter(divisible);
		let expected: Vec<&u8> = data.iter().filter(divisible).rev().collect();

		prop_assert_eq!(view.walk().rev().collect::<Vec<_>>(), expected.clone());
		prop_assert_eq!((borrowed(&view) | reverse()).into_iter().collect::<Vec<_>>(), expected);
	}

	#[test]
	fn cached_reverse_agrees(data in any::<Vec<u8>>(), divisor in 1..5_u8) {
		let view = &data | filter(move |x: &&u8| **x % divisor == 0);
		let cached: Vec<_> = (borrowed(&view) | cached_reverse()).into_iter().collect();
		let plain: Vec<_> = (borrowed(&view) | reverse()).into_iter().collect();
		prop_assert_eq!(cached, plain);
	}

	#[test]
	fn distance_counts_steps(data in any::<Vec<u32>>()) {
		let forward = from_iterator(data.clone());
		prop_assert_eq!(distance(&forward), forward.walk().count());
		prop_assert_eq!(distance(&forward), data.len());

		let sized = &data | take(data.len() / 2);
		prop_assert_eq!(distance(&sized), sized.walk().count());
	}
}
