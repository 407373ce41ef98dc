//! Command-line front end: loads an export into a [`Session`](crate::Session)
//! and prints the inbox, a thread, or summary statistics.

pub mod commands;

pub use commands::{Cli, Commands, run};
