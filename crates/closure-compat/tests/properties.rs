use std::collections::HashSet;

use closure_compat::array;
use proptest::prelude::*;

proptest! {
    #[test]
    fn filter_keeps_order_and_never_grows(v in proptest::collection::vec(any::<i16>(), 0..64)) {
        let kept = array::filter(Some(&v), |_, n, _, _| n % 3 == 0, None);
        prop_assert!(kept.len() <= v.len());
        let expected: Vec<i16> = v.iter().copied().filter(|n| n % 3 == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn map_preserves_length(v in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mapped = array::map(Some(&v), |_, n, i, _| (i, n.wrapping_mul(2)), None);
        prop_assert_eq!(mapped.len(), v.len());
        for (i, (index, _)) in mapped.iter().enumerate() {
            prop_assert_eq!(i, *index);
        }
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrences(v in proptest::collection::vec(0u8..16, 0..64)) {
        let mut expected = Vec::new();
        let mut seen = HashSet::new();
        for n in &v {
            if seen.insert(*n) {
                expected.push(*n);
            }
        }

        let mut in_place = v.clone();
        array::remove_duplicates(Some(&mut in_place), None);
        prop_assert_eq!(&in_place, &expected);

        let mut source = v.clone();
        let mut rv = vec![99u8];
        array::remove_duplicates(Some(&mut source), Some(&mut rv));
        prop_assert_eq!(&rv, &expected);
        prop_assert_eq!(&source, &expected);
    }

    #[test]
    fn sort_matches_std(v in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut ours = v.clone();
        array::sort(Some(&mut ours));
        let mut theirs = v;
        theirs.sort();
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn sort_by_is_stable(v in proptest::collection::vec((0u8..4, any::<u16>()), 0..100)) {
        let mut ours = v.clone();
        array::sort_by(Some(&mut ours), |a, b| a.0.cmp(&b.0));
        let mut theirs = v;
        theirs.sort_by_key(|pair| pair.0);
        prop_assert_eq!(ours, theirs);
    }

    #[test]
    fn remove_at_follows_splice_indexing(
        v in proptest::collection::vec(any::<i8>(), 0..32),
        index in -40isize..40
    ) {
        let len = v.len() as isize;
        let start = if index < 0 { (len + index).max(0) } else { index };
        let mut expected = v.clone();
        let in_range = start < len;
        if in_range {
            expected.remove(start as usize);
        }

        let mut ours = v;
        prop_assert_eq!(array::remove_at(Some(&mut ours), index), in_range);
        prop_assert_eq!(ours, expected);
    }

    #[test]
    fn clone_is_equal_but_detached(v in proptest::collection::vec(any::<u32>(), 0..32)) {
        let mut copy = array::clone(Some(&v));
        prop_assert_eq!(&copy, &v);
        copy.push(0);
        prop_assert_eq!(copy.len(), v.len() + 1);
    }

    #[test]
    fn contains_agrees_with_iter(
        v in proptest::collection::vec(0i32..10, 0..16),
        needle in 0i32..10
    ) {
        prop_assert_eq!(array::contains(Some(&v), &needle), v.contains(&needle));
    }
}
