//! Many Deals at once.
pub mod batch;
pub use batch::*;

pub mod deal;
pub use deal::*;

pub mod pipeline;
pub use pipeline::*;

pub mod report;
pub use report::*;

#[cfg(feature = "server")]
pub mod args;
#[cfg(feature = "server")]
pub use args::*;
