//! Add handler for the tracker shell

use crate::TrackerShell;
use crate::tracker::{Priority, Project};
use anyhow::Result;

impl TrackerShell {
    /// Creates a project and puts it on the active list.
    /// Priority falls back to the configured default; the estimate to "0".
    pub fn handle_add(
        &mut self,
        class_name: &str,
        due_date: &str,
        description: &str,
        priority: Option<Priority>,
        estimate: Option<&str>,
    ) -> Result<String> {
        let calendar = self.tracker.calendar().clone();

        // Build and validate the whole project before touching the tracker
        let mut project = Project::new(class_name, due_date, description, &calendar)?;
        project.set_priority(priority.unwrap_or(self.config.default_priority), &calendar);
        if let Some(hours) = estimate {
            project.set_time_estimate(hours, &calendar)?;
        }

        let rendered = project.render(&calendar);
        self.tracker.add_project(project);
        tracing::info!(class = class_name, "project added");

        Ok(format!(
            "Project added successfully!\n{}\n{}",
            rendered,
            self.tracker.stats()
        ))
    }
}
