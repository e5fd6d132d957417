//! Error handling for the console
//!
//! All fallible operations in the crate return [`Result`], whose error side is
//! the single [`ConsoleError`] enum.

pub mod error;

pub use error::*;
