//! Terminal input handling.

pub mod map;

pub use map::{map_key, should_quit};
