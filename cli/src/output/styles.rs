//! Style constants and clap help styling configuration.

use anstyle::{AnsiColor, Effects, Style};

/// Blue: completed todos.
pub(crate) const DONE: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Blue)));

/// White: todos still open.
pub(crate) const PENDING: Style =
    Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::White)));

/// Dimmed: ids and other secondary text.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

/// Red: errors.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));

/// Custom clap styles for help output, matching the CLI palette.
pub fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(
            Style::new()
                .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)))
                .effects(Effects::BOLD),
        )
        .usage(
            Style::new()
                .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)))
                .effects(Effects::BOLD),
        )
        .literal(Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Cyan))))
        .placeholder(Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Cyan))))
        .error(ERROR.effects(Effects::BOLD))
}
