// crates/shared-kernel/src/lib.rs
//! Value objects shared by the engine and the command-line front end.

pub mod value_objects;

pub use value_objects::{CharCount, Counters, LineCount, WordCount};
