pub mod sort;
mod bubble;
mod selection;
mod insertion;
mod merge;
mod quick;
mod heap;
pub mod config;
pub mod error;
pub mod shape;
pub mod loader;
pub mod report;

pub use sort::{benchmark_sort, sort, Algorithm};
pub use bubble::bubble_sort;
pub use selection::selection_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use heap::heap_sort;
pub use error::{LoadError, ShapeError, SortError};
pub use shape::{CompareType, Shape, ShapeKind};
pub use loader::load_shapes;
