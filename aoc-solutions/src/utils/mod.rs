//! Helpers shared between puzzle solutions

pub mod math;
pub mod strings;
