//! Font lookup.
pub mod font;
