//! Command handlers for the binary

pub mod commands;

pub use commands::generate;
