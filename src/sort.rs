use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::bubble::bubble_sort;
use crate::error::SortError;
use crate::heap::heap_sort;
use crate::insertion::insertion_sort;
use crate::merge::merge_sort;
use crate::quick::quick_sort;
use crate::selection::selection_sort;

/// The six supported strategies. Every one of them orders a slice so that no
/// adjacent pair compares `Less`, i.e. comparator-greater elements first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Only bubble, insertion and merge sort keep equal elements in input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge)
    }

    pub fn run<T, F>(self, arr: &mut [T], comp: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Bubble => bubble_sort(arr, comp),
            Algorithm::Selection => selection_sort(arr, comp),
            Algorithm::Insertion => insertion_sort(arr, comp),
            Algorithm::Merge => merge_sort(arr, comp),
            Algorithm::Quick => quick_sort(arr, comp),
            Algorithm::Heap => heap_sort(arr, comp),
        }
    }

    /// Runs the algorithm once and returns the wall-clock time it took.
    pub fn sort_timed<T, F>(self, arr: &mut [T], comp: F) -> Duration
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        trace!("Starting {} sort of {} elements", self, arr.len());
        let start = Instant::now();
        self.run(arr, comp);
        let duration = start.elapsed();
        debug!("{} sort of {} elements: {:?}", self, arr.len(), duration);
        duration
    }

    fn valid_names() -> String {
        "bubble|b, selection|s, insertion|i, merge|m, quick|q, heap|h|z".to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "" => Err(SortError::InvalidInput("algorithm identifier is empty")),
            "b" | "bubble" => Ok(Algorithm::Bubble),
            "s" | "selection" => Ok(Algorithm::Selection),
            "i" | "insertion" => Ok(Algorithm::Insertion),
            "m" | "merge" => Ok(Algorithm::Merge),
            "q" | "quick" => Ok(Algorithm::Quick),
            // `z` is kept for compatibility with older invocations
            "h" | "heap" | "z" => Ok(Algorithm::Heap),
            _ => Err(SortError::UnknownAlgorithm {
                name: s.to_string(),
                valid: Algorithm::valid_names(),
            }),
        }
    }
}

/// Validates the inputs, resolves `algorithm` and times one sort of `arr`.
///
/// `None` stands for an absent slice or comparator and is rejected before
/// anything is touched; so is an unknown identifier.
pub fn benchmark_sort<T, F>(
    arr: Option<&mut [T]>,
    comp: Option<F>,
    algorithm: &str,
) -> Result<Duration, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let arr = arr.ok_or(SortError::InvalidInput("sequence is absent"))?;
    let comp = comp.ok_or(SortError::InvalidInput("comparator is absent"))?;
    let algorithm: Algorithm = algorithm.parse()?;

    Ok(algorithm.sort_timed(arr, comp))
}

/// Sorts `arr` in place with the algorithm named by `algorithm` and returns
/// the elapsed time.
pub fn sort<T, F>(arr: &mut [T], comp: F, algorithm: &str) -> Result<Duration, SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    benchmark_sort(Some(arr), Some(comp), algorithm)
}
