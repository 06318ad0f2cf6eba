//! Shared primitive types used across the pipeline.

/// Calendar year derived from a record's parsed date.
pub type Year = i32;

/// Calendar month (1-12) derived from a record's parsed date.
pub type Month = u32;
