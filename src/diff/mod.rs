//! Changes between consecutive snapshots.
pub mod delta;
pub use delta::*;

pub mod differ;
pub use differ::*;
