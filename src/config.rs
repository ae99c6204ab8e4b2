use log::LevelFilter;

/// Distance between two sampled shapes in the checkpoint report.
pub const CHECKPOINT_INTERVAL: usize = 1000;

/// Stack size of the worker thread the binary sorts on. Quick sort recurses
/// once per partition, so an ordered file of N shapes can go N frames deep.
pub const SORT_STACK_SIZE: usize = 512 * 1024 * 1024;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

const _: () = {
    assert!(CHECKPOINT_INTERVAL > 0, "CHECKPOINT_INTERVAL must be positive");
    assert!(SORT_STACK_SIZE >= 2 * 1024 * 1024, "SORT_STACK_SIZE below the default thread stack");
};
