use lazy_range::{
	adaptors as lz, algorithm::distance, category_of, is_sentineled, sources::*, CategoryKind,
	Iterable, LazyExt,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[test]
fn zip_takes_the_weakest() {
	let forward = from_iterator([1, 2, 3]);
	let vector = vec![4, 5, 6];
	let zipped = forward.zip(&vector);

	assert_eq!(category_of(&zipped), CategoryKind::Forward);
	assert_eq!(distance(&zipped), 3);
	assert_eq!(
		zipped.into_iter().map(|(a, &b)| (a, b)).collect::<Vec<_>>(),
		[(1, 4), (2, 5), (3, 6)]
	);
}

#[test]
fn zip_of_random_access_stays_random_access() {
	let a = [1, 2];
	let b = vec![3, 4, 5, 6, 7];
	let zipped = &a | lz::zip(&b);

	assert_eq!(category_of(&zipped), CategoryKind::RandomAccess);
	assert_eq!(distance(&zipped), 2);
	assert_eq!(zipped.end() - zipped.begin(), 2);
}

#[test]
fn zip_with_bidirectional() {
	let data = vec![1, 2, 3, 4];
	let zipped = (&data).filter(|x: &&i32| **x > 1).zip(&data);
	assert_eq!(category_of(&zipped), CategoryKind::Bidirectional);
}

#[test]
fn positional_transforms_keep_their_category() {
	let data = vec![1, 2, 3];
	assert_eq!(category_of(&(&data).map(|x: &i32| x + 1)), CategoryKind::RandomAccess);
	assert_eq!(category_of(&(&data).take(2)), CategoryKind::RandomAccess);
	assert_eq!(category_of(&(&data).drop(1)), CategoryKind::RandomAccess);
	assert_eq!(category_of(&(&data).enumerate()), CategoryKind::RandomAccess);
	assert_eq!(category_of(&(&data).reverse()), CategoryKind::RandomAccess);
	assert_eq!(category_of(&(&data).cached_reverse()), CategoryKind::RandomAccess);
	assert_eq!(category_of(&(&data).chunks(2)), CategoryKind::RandomAccess);

	let forward = from_iterator(vec![1, 2, 3]);
	assert_eq!(category_of(&forward.clone().map(|x: i32| x + 1)), CategoryKind::Forward);
	assert_eq!(category_of(&forward.take(2)), CategoryKind::Forward);
}

#[test]
fn predicates_cap_at_bidirectional() {
	let data = vec![1, 2, 3];
	assert_eq!(
		category_of(&(&data).filter(|_: &&i32| true)),
		CategoryKind::Bidirectional
	);
	assert_eq!(
		category_of(&(&data).take_while(|_: &&i32| true)),
		CategoryKind::Bidirectional
	);
	assert_eq!(
		category_of(&(&data).filter(|_: &&i32| true).chunks(2)),
		CategoryKind::Bidirectional
	);

	let forward = from_iterator(vec![1, 2, 3]);
	assert_eq!(category_of(&forward.filter(|_: &i32| true)), CategoryKind::Forward);
}

#[test]
fn accumulation_is_forward() {
	let data = vec![1, 2, 3];
	assert_eq!(
		category_of(&(&data).inclusive_scan(0, |a: &i32, x: &i32| a + x)),
		CategoryKind::Forward
	);
}

#[test]
fn sentineled_ness() {
	let data = vec![1, 2, 3];
	assert!(!is_sentineled(&(&data).filter(|_: &&i32| true)));
	assert!(!is_sentineled(&(&data).take(2)));
	assert!(!is_sentineled(&(&data).enumerate()));
	assert!(!is_sentineled(&(&data).chunks(2)));
	assert!(is_sentineled(&from_iterator(vec![1, 2]).take(1)));
	assert!(is_sentineled(&(&data).filter(|_: &&i32| true).take(2)));
	assert!(is_sentineled(&(&data).filter(|_: &&i32| true).enumerate()));
	assert!(is_sentineled(&(&data).filter(|_: &&i32| true).chunks(2)));
	assert!(is_sentineled(&(&data).take_while(|_: &&i32| true)));
	assert!(!is_sentineled(&(&data).take(2).common()));
	assert!(!is_sentineled(&(&data).take(2).reverse()));
	assert!(is_sentineled(&generate(|| 1)));
	assert!(!is_sentineled(&range(4)));
	assert!(!is_sentineled(&repeat('x', 4)));

	let unbounded = generate_while(|| Some(1)).filter(|_: &i32| true);
	assert!(is_sentineled(&unbounded));
}

#[test]
fn common_is_forward_for_sentineled_input() {
	let data = vec![1, 2, 3];
	let common = (&data).take_while(|x: &&i32| **x < 3).common();
	assert_eq!(category_of(&common), CategoryKind::Forward);
	assert_eq!(common.into_iter().copied().collect::<Vec<_>>(), [1, 2]);

	let passthrough = (&data).common();
	assert_eq!(category_of(&passthrough), CategoryKind::RandomAccess);
}
