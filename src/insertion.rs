use std::cmp::Ordering;

/// Insertion sort. Every predecessor that compares `Less` than the key moves
/// one slot to the right; the key lands in the gap. Stable, O(n) on ordered
/// input.
pub fn insertion_sort<T, F>(arr: &mut [T], mut comp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        // the key stays at i until the scan is done, so the comparisons are
        // the same as shifting one slot at a time
        let mut j = i;
        while j > 0 && comp(&arr[j - 1], &arr[i]) == Ordering::Less {
            j -= 1;
        }
        if j < i {
            arr[j..=i].rotate_right(1);
        }
    }
}
