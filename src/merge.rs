use std::cmp::Ordering;

/// Top-down merge sort over `arr`. Each merge copies both halves into
/// temporary buffers and writes them back, so elements must be `Clone`.
/// Stable: on ties the left half wins.
pub fn merge_sort<T, F>(arr: &mut [T], mut comp: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = arr.len();
    if n < 2 {
        return;
    }
    merge_sort_rec(arr, 0, n - 1, &mut comp);
}

fn merge_sort_rec<T, F>(arr: &mut [T], left: usize, right: usize, comp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if left < right {
        let mid = left + (right - left) / 2;
        merge_sort_rec(arr, left, mid, comp);
        merge_sort_rec(arr, mid + 1, right, comp);
        merge(arr, left, mid, right, comp);
    }
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]` back into `arr`.
fn merge<T, F>(arr: &mut [T], left: usize, mid: usize, right: usize, comp: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left_run: Vec<T> = arr[left..=mid].to_vec();
    let right_run: Vec<T> = arr[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        if comp(&left_run[i], &right_run[j]) != Ordering::Less {
            arr[k] = left_run[i].clone();
            i += 1;
        } else {
            arr[k] = right_run[j].clone();
            j += 1;
        }
        k += 1;
    }

    for element in left_run[i..].iter().chain(right_run[j..].iter()) {
        arr[k] = element.clone();
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small() {
        let mut arr = [38, 27, 43, 3, 9, 82, 10];
        merge_sort(&mut arr, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(arr, [82, 43, 38, 27, 10, 9, 3]);
    }

    #[test]
    fn test_merge_runs() {
        let mut arr = [9, 5, 1, 8, 4, 2];
        let mut comp = |a: &i32, b: &i32| a.cmp(b);
        merge(&mut arr, 0, 2, 5, &mut comp);
        assert_eq!(arr, [9, 8, 5, 4, 2, 1]);
    }

    #[test]
    fn test_stable() {
        let mut arr: Vec<(u8, usize)> = (0..40).map(|i| ((i % 3) as u8, i)).collect();
        merge_sort(&mut arr, |a, b| a.0.cmp(&b.0));
        for pair in arr.windows(2) {
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1, "{:?} before {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_two_elements() {
        let mut arr = ["b", "a"];
        merge_sort(&mut arr, |a, b| b.cmp(a));
        assert_eq!(arr, ["a", "b"]);
    }
}
