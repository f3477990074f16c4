//! Project Tracker Library
//!
//! Tracks academic projects (assignments) with a due date, priority, time
//! estimate and completion state, and answers queries over them: filter by
//! priority, due soon, overdue, class-name search, and sorts by due date or
//! priority.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Shell Layer**: `TrackerShell` - parses command lines and renders replies
//! - **Domain Layer**: `tracker` module - `Project` records and the `ProjectTracker` facade
//! - **Container Layer**: `collections` module - the growable array holding active
//!   projects and the doubly linked list holding completed ones
//!
//! There is no persistence: a tracker lives as long as its owner.
//!
//! # Example
//!
//! ```
//! use project_tracker::{Calendar, Project, ProjectTracker};
//! use chrono::NaiveDate;
//!
//! let calendar = Calendar::fixed(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
//! let mut tracker = ProjectTracker::with_calendar(calendar.clone());
//!
//! tracker.add_project(Project::new("CS101", "12/31/2099", "Homework", &calendar).unwrap());
//! tracker.add_project(Project::new("CS102", "12/15/2099", "Lab", &calendar).unwrap());
//! tracker.sort_projects();
//!
//! assert_eq!(tracker.get_projects()[0].class_name(), "CS102");
//! ```

pub mod calendar;
pub mod collections;
pub mod command;
pub mod config;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod tracker;
pub mod validation;

use anyhow::Result;
use clap::Parser;

// Re-export commonly used types
pub use calendar::{Calendar, Clock, DateFormat, FixedClock, SystemClock};
pub use collections::{DoublyLinkedList, GrowableArray};
pub use config::TrackerConfig;
pub use error::TrackerError;
pub use handlers::update::ProjectEdit;
pub use tracker::{Priority, Project, ProjectStatus, ProjectTracker, ProjectView, TrackerStats};

use command::{Command, CommandLine};

/// Result of running one shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show; empty for blank and comment lines
    Output(String),
    /// The user asked to leave
    Quit,
}

/// Line-oriented front end over a [`ProjectTracker`]
///
/// Stands in for a GUI: every command maps onto the tracker's public
/// operations, and projects are addressed by their 1-based position in the
/// active list.
pub struct TrackerShell {
    pub(crate) tracker: ProjectTracker,
    pub(crate) config: TrackerConfig,
}

impl TrackerShell {
    /// Create a shell on the system clock using the configured date format
    ///
    /// # Example
    /// ```
    /// # use project_tracker::{TrackerShell, TrackerConfig};
    /// # fn main() -> anyhow::Result<()> {
    /// let shell = TrackerShell::new(TrackerConfig::default())?;
    /// assert_eq!(shell.tracker().get_total_projects(), 0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let calendar = config.calendar()?;
        Ok(Self::with_calendar(config, calendar))
    }

    pub fn with_calendar(config: TrackerConfig, calendar: Calendar) -> Self {
        Self {
            tracker: ProjectTracker::with_calendar(calendar),
            config,
        }
    }

    pub fn tracker(&self) -> &ProjectTracker {
        &self.tracker
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Run one command line
    ///
    /// Blank lines and lines starting with `#` are ignored. Usage errors and
    /// rejected input come back as `Err`; the shell stays usable afterwards.
    pub fn execute(&mut self, line: &str) -> Result<Reply> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Reply::Output(String::new()));
        }

        let args = validation::split_arguments(trimmed)?;
        let command = match CommandLine::try_parse_from(&args) {
            Ok(parsed) => parsed.command,
            Err(e) => match e.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    return Ok(Reply::Output(e.render().to_string().trim_end().to_string()));
                }
                _ => anyhow::bail!("{}", e.render().to_string().trim_end()),
            },
        };
        tracing::debug!(?command, "executing command");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Command) -> Result<Reply> {
        let output = match command {
            Command::Add {
                class_name,
                due_date,
                description,
                priority,
                estimate,
            } => self.handle_add(
                &class_name,
                &due_date,
                &description,
                priority,
                estimate.as_deref(),
            )?,
            Command::List { view } => self.handle_list(view),
            Command::Completed => self.handle_completed(),
            Command::Show { position } => self.handle_show(position)?,
            Command::Search { term } => self.handle_search(&term),
            Command::Sort { by } => self.handle_sort(by),
            Command::Edit {
                position,
                class_name,
                due_date,
                description,
                priority,
                estimate,
                actual,
            } => self.handle_edit(
                position,
                ProjectEdit {
                    class_name,
                    due_date,
                    description,
                    priority,
                    estimate,
                    actual,
                },
            )?,
            Command::Log { position, hours } => self.handle_log(position, &hours)?,
            Command::Delete { position } => self.handle_delete(position)?,
            Command::Complete { position } => self.handle_complete(position)?,
            Command::Stats => self.handle_stats(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(output))
    }
}
