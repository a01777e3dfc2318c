//! Per-seat hand recovery from one snapshot's markup.
pub mod extractor;
pub use extractor::*;

pub mod predicates;
pub use predicates::*;

pub mod snapshot;
pub use snapshot::*;

pub mod state;
pub use state::*;

pub mod visibility;
pub use visibility::*;
