use std::cmp::Ordering;

/// Quick sort with a Lomuto partition around the last element.
///
/// There is no pivot randomisation: already-ordered input and runs of equal
/// keys degrade to O(n²) comparisons and a recursion depth of O(n). Callers
/// sorting large, possibly ordered inputs need a correspondingly large stack.
/// Not stable.
pub fn quick_sort<T, F>(arr: &mut [T], mut comp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n < 2 {
        return;
    }
    quick_sort_rec(arr, 0, n - 1, &mut comp);
}

fn quick_sort_rec<T, F>(arr: &mut [T], low: usize, high: usize, comp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if low < high {
        let pivot = partition(arr, low, high, comp);
        if pivot > low {
            quick_sort_rec(arr, low, pivot - 1, comp);
        }
        quick_sort_rec(arr, pivot + 1, high, comp);
    }
}

/// Moves every element comparing `Greater` than `arr[high]` in front of it
/// and returns the pivot's final index.
fn partition<T, F>(arr: &mut [T], low: usize, high: usize, comp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // next slot for an element that goes ahead of the pivot
    let mut store = low;

    for j in low..high {
        if comp(&arr[j], &arr[high]) == Ordering::Greater {
            arr.swap(store, j);
            store += 1;
        }
    }

    arr.swap(store, high);
    store
}
