// crates/shared-kernel/src/value_objects/mod.rs
pub mod counters;
pub mod counts;

pub use counters::Counters;
pub use counts::{CharCount, LineCount, WordCount};
