//! Command modules for the uncomment CLI.
//!
//! The tool has a single operation, uncommenting a directory tree, built on
//! the shared command trait and result types.

pub mod common;
pub mod traits;

pub mod uncomment;

pub use uncomment::{run_uncomment, UncommentArgs};
