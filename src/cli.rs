//! Command-line layer: argument parsing and one handler per subcommand.

pub mod commands;
pub mod parser;
