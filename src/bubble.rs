use std::cmp::Ordering;

/// Bubble sort. A pair is swapped when the comparator reports the left
/// element as `Less`, so comparator-greater elements bubble to the front.
///
/// Stops after the first pass without swaps, which makes ordered input O(n).
/// Stable.
pub fn bubble_sort<T, F>(arr: &mut [T], mut comp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;

        // last i elements are settled
        for j in 0..n - i - 1 {
            if comp(&arr[j], &arr[j + 1]) == Ordering::Less {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
