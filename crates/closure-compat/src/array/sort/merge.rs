use std::cmp::Ordering;

use super::insertion::try_insertion_sort_by;

/// Runs at or below this length are insertion sorted.
const RUN: usize = 16;

/// Stable top-down merge sort with a fallible comparator.
///
/// Unlike `slice::sort_by`, an inconsistent comparator cannot make this panic;
/// it only produces some permutation of the input.
pub(crate) fn try_merge_sort_by<T, E, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if items.len() <= RUN {
        try_insertion_sort_by(&mut items, compare)?;
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = try_merge_sort_by(items, compare)?;
    let right = try_merge_sort_by(right, compare)?;

    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // Ties take from the left run, which keeps equal items in order.
        let take_right = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => compare(a, b)? == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }
    Ok(out)
}
