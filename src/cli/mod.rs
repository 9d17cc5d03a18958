//! CLI layer: argument parsing, routing and output

pub mod args;
pub mod commands;
pub mod error;
pub mod invocation;
pub mod output;

pub use args::{parse_args, Cli, ParsedArgs};
pub use error::{CliError, CliResult};
pub use invocation::{Invocation, Request};
