/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";

/// Placeholder mostrato per le celle vuote.
pub const EMPTY_CELL: &str = "--";

pub fn grey(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}

/// Time in → green, time out → red, blank → grey placeholder.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == EMPTY_CELL {
        return grey(value);
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
