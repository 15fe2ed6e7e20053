use clap::{Parser, Subcommand};

use crate::output;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8888";

#[derive(Debug, Parser)]
#[command(name = "todo", version, about = "Manage todos on a todo server", styles = output::clap_styles())]
pub struct Cli {
    /// Base URL of the todo server
    #[arg(long, global = true, env = "TODO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Create a todo
    New { content: String },

    /// Delete a todo
    Delete { id: String },

    /// Replace the content of a todo, keeping its done flag
    Update { id: String, content: String },

    /// Mark a todo as done, keeping its content
    Done { id: String },

    /// List all todos
    List {
        /// Print the full records as JSON
        #[arg(long)]
        json: bool,
    },
}
