//! The directive protocol and its synthesis.
pub mod directive;
pub use directive::*;

pub mod list;
pub use list::*;

pub mod replay;
pub use replay::*;

pub mod synthesizer;
pub use synthesizer::*;
