//! Command-line interface module.

mod args;
pub mod build;
pub mod manifest;
pub mod query;
pub mod render;

pub use args::{BuildArgs, Cli, Commands, QueryArgs};
