//! Command-line client for the todo service.
//!
//! `commands::run` drives one subcommand through `RemoteTodos`, which pairs
//! the sans-IO `TodoClient` from `todo-core` with a `Transport`.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod remote;
pub mod transport;

pub use cli::{Cli, Command};
pub use error::{CliError, CliResult};
pub use remote::RemoteTodos;
pub use transport::{Transport, UreqTransport};
