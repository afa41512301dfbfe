use std::cmp::Ordering;

/// Insertion sort with a fallible comparator.
///
/// Stable, in place, and it never indexes out of bounds, whatever the
/// comparator answers. Stops at the first comparator error, leaving `arr`
/// partially sorted.
pub(crate) fn try_insertion_sort_by<T, E, F>(arr: &mut [T], compare: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let len = arr.len();
    for i in 1..len {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j])? == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(())
}
