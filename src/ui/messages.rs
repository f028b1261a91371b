//! Console messages: the only log surface of the tool.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (FG_GREEN, "✅"),
            Level::Warning => (FG_YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }

    /// Warnings and errors go to stderr so stdout stays parseable.
    fn to_stderr(&self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

pub fn emit<T: fmt::Display>(level: Level, msg: T) {
    let (color, icon) = level.style();
    let line = format!("{color}{BOLD}{icon} {RESET}{msg}");

    if level.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Intestazione di sezione
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}=== {msg} ==={RESET}");
}
