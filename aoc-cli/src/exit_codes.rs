//! Exit codes of the `aoc` and `aoc-exec` binaries

/// Everything ran and no fixture record produced a wrong answer
pub const OK: i32 = 0;
/// At least one fixture record produced a wrong answer
pub const TEST_FAILURE: i32 = 1;
/// Usage, configuration, network, filesystem or solution errors
pub const ERROR: i32 = 2;
