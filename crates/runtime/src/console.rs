use std::io::{self, IsTerminal};

use log::debug;
use terminal_size::{Width, terminal_size};

use crate::config::{COLUMNS_ENV, DEFAULT_CONSOLE_WIDTH};

/// Query the console width once for the whole invocation.
///
/// Order of preference: the controlling terminal of stdout, then `$COLUMNS`,
/// then [`DEFAULT_CONSOLE_WIDTH`]. Never fails.
pub fn console_width() -> usize {
    let tty = if io::stdout().is_terminal() {
        terminal_size().map(|(Width(w), _)| w as usize)
    } else {
        None
    };
    let columns = std::env::var(COLUMNS_ENV).ok();

    let width = resolve_width(tty, columns.as_deref());
    debug!("[console] width={width} (tty={tty:?}, {COLUMNS_ENV}={columns:?})");
    width
}

/// Decide the console width from what the environment could tell us.
pub fn resolve_width(tty: Option<usize>, columns: Option<&str>) -> usize {
    if let Some(w) = tty
        && w > 0
    {
        return w;
    }

    columns
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_CONSOLE_WIDTH)
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
