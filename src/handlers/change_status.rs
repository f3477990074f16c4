//! Complete and delete handlers for the tracker shell

use crate::TrackerShell;
use crate::validation;
use anyhow::{Result, bail};

impl TrackerShell {
    /// Moves an active project to the completed list.
    pub fn handle_complete(&mut self, position: usize) -> Result<String> {
        let project = self.active_project(position)?;
        if !self.tracker.mark_project_completed(&project) {
            bail!("Project '{}' is no longer active", project.class_name());
        }
        tracing::info!(class = project.class_name(), "project marked complete");
        Ok(format!(
            "Completed: {} ({})\n{}",
            project.class_name(),
            project.description(),
            self.tracker.stats()
        ))
    }

    /// Removes an active project for good.
    pub fn handle_delete(&mut self, position: usize) -> Result<String> {
        let project = self.active_project(position)?;
        if !self.tracker.delete_project(&project) {
            bail!("Project '{}' is no longer active", project.class_name());
        }
        tracing::info!(class = project.class_name(), "project deleted");
        Ok(format!(
            "Deleted: {} ({})\n{}",
            project.class_name(),
            project.description(),
            self.tracker.stats()
        ))
    }

    /// Copy of the active project at a 1-based position
    pub(crate) fn active_project(&self, position: usize) -> Result<crate::tracker::Project> {
        let index = validation::resolve_position(position, self.tracker.get_active_project_count())?;
        match self.tracker.project_at(index) {
            Some(project) => Ok(project.clone()),
            None => bail!("No project at position {}", position),
        }
    }
}
