//! Rendering of todos for the terminal.
//!
//! Writers receive ANSI styles unconditionally; `main` hands them an
//! `anstream` stream, which strips the codes when stdout is not a terminal.

mod styles;

use std::io::Write;

use todo_core::Todo;

pub use styles::clap_styles;

use styles::{DIM, DONE, ERROR, PENDING};

/// One line per todo: `<id> <content>`, content colored by `done`.
pub fn render_todo(out: &mut impl Write, todo: &Todo) -> std::io::Result<()> {
    let style = if todo.done { DONE } else { PENDING };
    writeln!(out, "{DIM}{}{DIM:#} {style}{}{style:#}", todo.id, todo.content)
}

pub fn render_plain(out: &mut impl Write, todos: &[Todo]) -> std::io::Result<()> {
    for todo in todos {
        render_todo(out, todo)?;
    }
    Ok(())
}

/// The full record sequence as a JSON array, newline terminated.
pub fn render_json(out: &mut impl Write, todos: &[Todo]) -> Result<(), serde_json::Error> {
    serde_json::to_writer(&mut *out, todos)?;
    writeln!(out).map_err(serde_json::Error::io)
}

/// Print an error message to stderr.
pub fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}error:{ERROR:#} {msg}").ok();
}
