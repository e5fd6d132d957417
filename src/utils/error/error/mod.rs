//! Error types for the console

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{ConsoleError, Result};
