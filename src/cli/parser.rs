use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ticktrack
/// CLI stopwatch and time tracker with notes and weekly stats
#[derive(Parser)]
#[command(
    name = "ticktrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: one stopwatch, saved trackers, notes and weekly activity stats",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Fill in missing configuration fields")]
        migrate: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Inspect or control the active timer
    Timer {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// Manage saved trackers
    Tracker {
        #[command(subcommand)]
        action: TrackerAction,
    },

    /// Manage free-text notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Manage todo-list notes
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Show the trailing 7-day activity summary
    Stats,

    /// View or change display preferences
    Prefs {
        #[arg(long = "theme", help = "Set the theme: darkest or night")]
        theme: Option<String>,

        #[arg(long = "dot-color", help = "Set the accent dot color (CSS color string)")]
        dot_color: Option<String>,

        #[arg(long = "print", help = "Print the current preferences")]
        print: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the saved tracker list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TimerAction {
    /// Show the current timer state
    Status,

    /// Start the timer
    Play,

    /// Pause the timer, committing the elapsed time
    Pause,

    /// Reset the timer to zero (a running timer keeps running)
    Reset,

    /// Commit the timer under a name; updates the edited tracker in place
    Save {
        /// Tracker name (must not be empty)
        name: String,
    },

    /// Switch which saved tracker the timer is editing
    Use {
        /// Tracker id to edit
        id: Option<i64>,

        #[arg(
            long = "new",
            help = "Switch to a fresh unsaved timer",
            conflicts_with = "id"
        )]
        new: bool,
    },

    /// Set the transient display name for the tracker under edit
    Name {
        name: String,
    },

    /// Overwrite the committed seconds directly
    Set {
        seconds: i64,
    },

    /// Live display refreshed every second; never writes to the store
    Watch {
        #[arg(long, help = "Stop after this many refreshes")]
        seconds: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum TrackerAction {
    /// List saved trackers (newest first)
    List,

    /// Rename a tracker
    Rename {
        id: i64,
        name: String,
    },

    /// Adjust a tracker's accumulated seconds
    SetTime {
        id: i64,
        seconds: i64,
    },

    /// Delete a tracker by id
    Del {
        id: i64,
    },

    /// Delete all trackers
    Clear {
        #[arg(long, help = "Skip the confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a free-text note
    Add {
        content: String,
    },

    /// List all notes (newest first)
    List,

    /// Replace the content of a text note
    Edit {
        id: i64,
        content: String,
    },

    /// Delete a note by id
    Del {
        id: i64,
    },

    /// Delete all notes
    Clear {
        #[arg(long, help = "Skip the confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo-list note with optional initial items
    Add {
        title: String,

        #[arg(long = "item", value_name = "TEXT", help = "Initial item (repeatable)")]
        items: Vec<String>,
    },

    /// List todo-list notes with their items
    List,

    /// Rename a todo list
    Title {
        id: i64,
        title: String,
    },

    /// Append an item to a todo list
    ItemAdd {
        id: i64,
        text: String,
    },

    /// Toggle an item's completed flag
    Toggle {
        id: i64,
        item: i64,
    },

    /// Edit an item's text
    ItemEdit {
        id: i64,
        item: i64,
        text: String,
    },

    /// Delete an item from a todo list
    ItemDel {
        id: i64,
        item: i64,
    },
}
