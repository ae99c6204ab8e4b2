use std::cmp::Ordering;

/// Heap sort. Repeatedly moves the heap root behind the shrinking heap.
/// Not stable, no extra memory.
pub fn heap_sort<T, F>(arr: &mut [T], mut comp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();

    // The root is the element that belongs at the back, i.e. the least one
    // under `comp`, so the heap is a max-heap under the reversed comparator.
    let mut heap_comp = |a: &T, b: &T| comp(b, a);

    for i in (0..n / 2).rev() {
        heapify(arr, n, i, &mut heap_comp);
    }

    for i in (1..n).rev() {
        arr.swap(0, i);
        heapify(arr, i, 0, &mut heap_comp);
    }
}

/// Restores the heap property for the subtree rooted at `root`, looking only
/// at the first `n` elements.
fn heapify<T, F>(arr: &mut [T], n: usize, mut root: usize, comp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < n && comp(&arr[left], &arr[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < n && comp(&arr[right], &arr[largest]) == Ordering::Greater {
            largest = right;
        }

        if largest == root {
            return;
        }
        arr.swap(root, largest);
        root = largest;
    }
}
