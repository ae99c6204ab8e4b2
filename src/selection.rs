use std::cmp::Ordering;

/// Selection sort: moves the comparator-greatest element of the unsorted
/// suffix to the front of it, one position at a time. O(n²) comparisons on
/// every input. Not stable.
pub fn selection_sort<T, F>(arr: &mut [T], mut comp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut max_idx = i;
        for j in i + 1..n {
            if comp(&arr[j], &arr[max_idx]) == Ordering::Greater {
                max_idx = j;
            }
        }
        arr.swap(max_idx, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small() {
        let mut arr = [5u32, 2, 9, 1, 5, 6];
        selection_sort(&mut arr, |a, b| a.cmp(b));
        assert_eq!(arr, [9, 6, 5, 5, 2, 1]);
    }

    #[test]
    fn test_comparisons() {
        let mut calls = 0;
        let mut arr: Vec<u32> = (0..10).collect();
        selection_sort(&mut arr, |a, b| {
            calls += 1;
            b.cmp(a)
        });
        assert_eq!(calls, 45);
        assert_eq!(arr, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_unstable() {
        // the first swap carries (1, 'a') past (1, 'b')
        let mut arr = [(1, 'a'), (1, 'b'), (2, 'c')];
        selection_sort(&mut arr, |a, b| a.0.cmp(&b.0));
        assert_eq!(arr, [(2, 'c'), (1, 'b'), (1, 'a')]);
    }
}
