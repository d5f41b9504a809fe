//! Hash collections shared across Scrim crates.

pub use rustc_hash::{FxHashMap, FxHashSet};
