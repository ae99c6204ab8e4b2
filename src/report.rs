use std::fmt::Display;
use std::time::Duration;

use crate::config::CHECKPOINT_INTERVAL;
use crate::shape::CompareType;
use crate::sort::Algorithm;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Checkpoint {
    First,
    Every(usize),
    Last(usize),
}

impl Checkpoint {
    pub fn index(self) -> usize {
        match self {
            Checkpoint::First => 0,
            Checkpoint::Every(i) | Checkpoint::Last(i) => i,
        }
    }
}

/// First element, every `CHECKPOINT_INTERVAL`-th element, and the last one
/// unless it already falls on the interval.
pub fn checkpoints(len: usize) -> Vec<Checkpoint> {
    if len == 0 {
        return Vec::new();
    }

    let mut res = vec![Checkpoint::First];
    res.extend((CHECKPOINT_INTERVAL..len).step_by(CHECKPOINT_INTERVAL).map(Checkpoint::Every));

    let last = len - 1;
    if len > 1 && last % CHECKPOINT_INTERVAL != 0 {
        res.push(Checkpoint::Last(last));
    }
    res
}

pub fn format_checkpoints<T: Display>(arr: &[T]) -> Vec<String> {
    checkpoints(arr.len())
        .into_iter()
        .map(|c| match c {
            Checkpoint::First => format!("First shape: {}", arr[0]),
            Checkpoint::Every(i) => format!("Shape at index {}: {}", i, arr[i]),
            Checkpoint::Last(i) => format!("Last shape: {}", arr[i]),
        })
        .collect()
}

pub fn print_checkpoints<T: Display>(arr: &[T]) {
    if arr.is_empty() {
        println!("No shapes to display");
        return;
    }
    for line in format_checkpoints(arr) {
        println!("{}", line);
    }
}

pub fn format_summary(algorithm: Algorithm, compare: CompareType, elapsed: Duration) -> String {
    format!(
        "Sorting completed using {} sort\nSorted by: {}\nTime taken: {:.2} milliseconds",
        algorithm,
        compare.description(),
        elapsed.as_secs_f64() * 1000.0
    )
}

pub fn print_summary(algorithm: Algorithm, compare: CompareType, elapsed: Duration) {
    println!();
    println!("{}", format_summary(algorithm, compare, elapsed));
    println!();
}
