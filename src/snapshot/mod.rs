//! Numbered snapshots of one Deal.
pub mod controls;
pub use controls::*;

pub mod extractor;
pub use extractor::*;

pub mod snapshot;
pub use snapshot::*;

#[cfg(test)]
mod tests;
