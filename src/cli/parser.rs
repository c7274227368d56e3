use crate::export::ExportFormat;
use crate::models::{HelpStatus, Mood};
use clap::{Parser, Subcommand};

/// Command-line interface definition for SCOPE
#[derive(Parser)]
#[command(
    name = "scope",
    version = env!("CARGO_PKG_VERSION"),
    about = "SCOPE: a journaling CLI that screens entries for schizophrenia-like language and tracks the trend",
    long_about = None
)]
pub struct Cli {
    /// Root directory for the database, logs, session file and models
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Act as this registered user for one command (ignores the saved session)
    #[arg(global = true, long = "user", value_name = "ID")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, database and data directories
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Log in, registering the user id on first use
    Login {
        /// Your user id
        #[arg(value_name = "ID")]
        user_id: String,

        #[arg(long = "name", help = "Your name")]
        name: String,
    },

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Classify today's journal entries and append them to your log
    Analyze {
        /// How are you feeling today?
        #[arg(long, value_enum)]
        mood: Mood,

        /// Have you ever sought professional help for mental health?
        #[arg(long = "help-status", value_enum)]
        help_status: HelpStatus,

        /// How many entries you are submitting (defaults to the number given)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
        count: Option<u8>,

        /// A journal entry (repeat for several entries)
        #[arg(long = "entry", short = 'e', value_name = "TEXT")]
        entries: Vec<String>,

        /// Read entries from a file, separated by blank lines
        #[arg(long = "from-file", value_name = "FILE")]
        from_file: Option<String>,
    },

    /// Show your journal log, newest first
    History {
        #[arg(long, short, help = "Show only the newest N rows")]
        limit: Option<usize>,
    },

    /// Export your journal log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", conflicts_with = "dir")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "DIR",
            help = "Directory for {user}_scope_log.<ext> (default: current directory)"
        )]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Chart the prediction score over time
    Trend {
        #[arg(long, help = "Chart width in columns")]
        width: Option<usize>,

        #[arg(long, help = "Chart height in rows")]
        height: Option<usize>,

        #[arg(long, help = "Also print every point as a table")]
        table: bool,
    },

    /// Inspect the configured classification model
    Model {
        #[arg(long = "info", help = "Load the model artifacts and print their metadata")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

impl Commands {
    /// Commands that act on a user's journal and need an authenticated session.
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Commands::Analyze { .. }
                | Commands::History { .. }
                | Commands::Export { .. }
                | Commands::Trend { .. }
        )
    }
}
