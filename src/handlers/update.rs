//! Edit and log handlers for the tracker shell

use crate::TrackerShell;
use crate::tracker::{Priority, Project};
use anyhow::{Result, bail};

/// Field overrides for `edit`; `None` keeps the current value
#[derive(Debug, Default, Clone)]
pub struct ProjectEdit {
    pub class_name: Option<String>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub estimate: Option<String>,
    pub actual: Option<String>,
}

impl TrackerShell {
    /// Edits an active project.
    ///
    /// Builds a replacement project from the current one with the given
    /// overrides, validating it like a new project, then swaps it in at the
    /// same position. Completion state is untouched.
    pub fn handle_edit(&mut self, position: usize, edit: ProjectEdit) -> Result<String> {
        let old = self.active_project(position)?;
        let calendar = self.tracker.calendar().clone();

        let due_date = match edit.due_date {
            Some(due) => due,
            None => calendar.format_date(old.due_date()),
        };
        let mut new = Project::new(
            edit.class_name.as_deref().unwrap_or(old.class_name()),
            &due_date,
            edit.description.as_deref().unwrap_or(old.description()),
            &calendar,
        )?;
        new.set_priority(edit.priority.unwrap_or(old.priority()), &calendar);
        new.set_time_estimate(
            edit.estimate.as_deref().unwrap_or(old.time_estimate()),
            &calendar,
        )?;
        new.set_actual_time(edit.actual.as_deref().unwrap_or(old.actual_time()), &calendar)?;

        let rendered = new.render(&calendar);
        if !self.tracker.update_project(&old, new) {
            bail!("Project '{}' is no longer active", old.class_name());
        }
        tracing::info!(class = old.class_name(), "project updated");
        Ok(format!("Project updated.\n{}\n{}", rendered, self.tracker.stats()))
    }

    /// Records the hours actually spent on an active project.
    pub fn handle_log(&mut self, position: usize, hours: &str) -> Result<String> {
        let old = self.active_project(position)?;
        let mut new = old.clone();
        new.set_actual_time(hours, self.tracker.calendar())?;

        let rendered = new.render(self.tracker.calendar());
        if !self.tracker.update_project(&old, new) {
            bail!("Project '{}' is no longer active", old.class_name());
        }
        Ok(format!("Time logged.\n{}\n{}", rendered, self.tracker.stats()))
    }
}
