#![deny(warnings)]

// Library crate for file-access

pub mod error;
pub mod facade;
pub mod operations;

pub use error::{FileAccessError, Result};
pub use facade::{FileStore, DEFAULT_INPUT_DIR};
