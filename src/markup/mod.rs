//! Tolerant reader for hand-authored lesson markup.
//!
//! Lesson pages were written by hand over many years. Tags are left unclosed,
//! closing tags go missing, and attributes mix quoting styles. The reader here
//! never fails: it builds a best-effort element tree and keeps byte spans into
//! the source so any element can be sliced back out verbatim.
pub mod document;
pub use document::*;

pub mod element;
pub use element::*;

pub mod entity;
pub use entity::*;
