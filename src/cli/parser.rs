use crate::export::ExportFormat;
use crate::models::filter::Cutoff;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rebuild daily attendance records (time in / time out / hours) from a spreadsheet export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filtri della vista, condivisi da `view` ed `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Employee email (default: configured email, or the first one imported)
    #[arg(long)]
    pub email: Option<String>,

    /// Month: 1-12 or English name (default: current month)
    #[arg(long, short = 'm')]
    pub month: Option<String>,

    /// Pay-period half: 1st = days 1-15, 2nd = days 16-31
    #[arg(long, short = 'c', value_enum)]
    pub cutoff: Option<Cutoff>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the rows of the first sheet as JSON (import hand-off format)
    Rows {
        /// Input file (.xlsx, .csv or .json)
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// List the employee emails found in the file (first-seen order)
    Emails {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Show the merged daily records for one employee and pay period
    View {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "events", help = "Show the filtered raw events instead of merged records")]
        events: bool,
    },

    /// Export the merged daily records shown by `view`
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Output file path (absolute path required)
        #[arg(long, short = 'o', value_name = "OUT")]
        out: String,

        /// Output format (default: from the output file extension)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },
}
