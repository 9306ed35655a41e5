//! UI Module - terminal output concerns
//!
//! - [`theme`] - Icons and size formatting
//! - [`output`] - `Output`, the terminal [`diskclean_core::Reporter`]

pub mod output;
pub mod theme;

pub use output::Output;
