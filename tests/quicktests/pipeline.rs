use ordtree::{binary_search, merge_sort};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn sort_is_ascending_permutation(xs: Vec<i8>) -> bool {
    let sorted = merge_sort(xs.clone());

    let mut expected = xs;
    expected.sort();

    sorted.windows(2).all(|w| w[0] <= w[1]) && sorted == expected
}

#[quickcheck]
fn sort_is_idempotent(xs: Vec<i8>) -> bool {
    let once = merge_sort(xs);
    merge_sort(once.clone()) == once
}

#[quickcheck]
fn search_finds_sorted_elements(xs: Vec<i8>) -> bool {
    let sorted = merge_sort(xs);

    (0..sorted.len()).all(|i| match binary_search(&sorted, &sorted[i]) {
        Some(j) => sorted[j] == sorted[i],
        None => false,
    })
}

#[quickcheck]
fn search_misses_absent(xs: Vec<i8>, target: i8) -> bool {
    let sorted = merge_sort(xs.into_iter().filter(|x| *x != target).collect());

    binary_search(&sorted, &target).is_none()
}

#[test]
fn sort_then_search() {
    let sorted = merge_sort(vec![5, 3, 8, 1]);

    assert_eq!(sorted, [1, 3, 5, 8]);
    assert_eq!(binary_search(&sorted, &8), Some(3));
    assert_eq!(binary_search(&sorted, &4), None);
}
