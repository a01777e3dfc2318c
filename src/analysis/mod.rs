//! Snapshot text and auction recovery.
pub mod auction;
pub use auction::*;

pub mod cleanup;
pub use cleanup::*;
