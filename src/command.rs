//! Command parsing for the tracker shell
//!
//! Each input line is split into arguments and parsed by clap as one
//! subcommand, without a binary name.

use crate::tracker::Priority;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

/// Which canned view `list` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// Every active project
    All,
    /// High-priority projects only
    High,
    /// Projects due within the configured window
    Week,
    /// Projects past their due date
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Earliest due date first
    Due,
    /// High priority first
    Priority,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new project
    Add {
        /// Class name (e.g. "CS101")
        class_name: String,
        /// Due date, e.g. 12/31/2099
        due_date: String,
        /// What has to be done
        description: String,
        /// high, medium or low
        #[arg(long)]
        priority: Option<Priority>,
        /// Estimated hours
        #[arg(long)]
        estimate: Option<String>,
    },
    /// List active projects
    List {
        #[arg(long, value_enum, default_value_t = ViewArg::All)]
        view: ViewArg,
    },
    /// List completed projects
    Completed,
    /// Show one active project in detail
    Show {
        /// Position in the active list (first is 1)
        position: usize,
    },
    /// Search active projects by class name (case-insensitive)
    Search {
        /// Text to look for; blank lists everything
        #[arg(default_value = "")]
        term: String,
    },
    /// Sort active projects
    Sort {
        #[arg(long, value_enum, default_value_t = SortKey::Due)]
        by: SortKey,
    },
    /// Edit an active project; omitted fields keep their value
    Edit {
        /// Position in the active list (first is 1)
        position: usize,
        #[arg(long = "class")]
        class_name: Option<String>,
        #[arg(long = "due")]
        due_date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        estimate: Option<String>,
        #[arg(long)]
        actual: Option<String>,
    },
    /// Record hours actually spent on an active project
    Log {
        /// Position in the active list (first is 1)
        position: usize,
        /// Total hours spent so far
        hours: String,
    },
    /// Delete an active project
    Delete {
        /// Position in the active list (first is 1)
        position: usize,
    },
    /// Mark an active project as completed
    Complete {
        /// Position in the active list (first is 1)
        position: usize,
    },
    /// Show project counts
    Stats,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}
