#![deny(warnings)]

// Filesystem operation implementations

pub mod list_dir;
pub mod read_file;
pub mod rename;
pub mod write_file;
