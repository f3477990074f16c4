use super::project::Project;
use crate::calendar::Calendar;
use crate::collections::{DoublyLinkedList, GrowableArray};

/// Tracks active and completed projects
///
/// Active projects live in a [`GrowableArray`], completed ones in a
/// [`DoublyLinkedList`]. A project belongs to at most one of the two.
/// `total_projects` is maintained incrementally and always equals
/// `active + completed`.
///
/// The tracker is not internally synchronized; a concurrent host has to
/// wrap it in a single lock.
#[derive(Debug, Clone, Default)]
pub struct ProjectTracker {
    pub(crate) projects: GrowableArray<Project>,
    pub(crate) completed_projects: DoublyLinkedList<Project>,
    total_projects: usize,
    pub(crate) calendar: Calendar,
}

impl ProjectTracker {
    /// Create an empty tracker using the system clock and default date format
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calendar(calendar: Calendar) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Add a project to the active set
    pub fn add_project(&mut self, project: Project) {
        tracing::debug!(class = project.class_name(), "adding project");
        self.projects.append(project);
        self.total_projects += 1;
    }

    /// Replace `old` with `new` at the same position
    ///
    /// Does nothing and returns `false` when no active project equals `old`.
    /// The total count is unchanged either way.
    pub fn update_project(&mut self, old: &Project, new: Project) -> bool {
        let Some(index) = self.projects.index_of(old) else {
            tracing::debug!(class = old.class_name(), "update skipped, project not found");
            return false;
        };
        tracing::debug!(index, from = old.class_name(), to = new.class_name(), "updating project");
        self.projects.set(index, new).is_ok()
    }

    /// Remove the first active project equal to `project`
    pub fn delete_project(&mut self, project: &Project) -> bool {
        self.take_project(project).is_some()
    }

    /// Move a project from the active set to the completed list
    ///
    /// Returns `false` without changes when the project is not active.
    /// The total count is the same before and after.
    pub fn mark_project_completed(&mut self, project: &Project) -> bool {
        let Some(mut done) = self.take_project(project) else {
            return false;
        };
        done.set_completed(true, &self.calendar);
        tracing::debug!(class = done.class_name(), "project completed");
        self.completed_projects.append(done);
        self.total_projects += 1;
        true
    }

    /// Snapshot of the active projects in their current order
    pub fn get_projects(&self) -> Vec<&Project> {
        self.projects.iter().collect()
    }

    /// Snapshot of the completed projects in completion order
    pub fn get_completed_projects(&self) -> Vec<&Project> {
        self.completed_projects.iter().collect()
    }

    pub fn get_total_projects(&self) -> usize {
        self.total_projects
    }

    pub fn get_active_project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn get_completed_project_count(&self) -> usize {
        self.completed_projects.len()
    }

    /// Active project at `index`, if any
    pub fn project_at(&self, index: usize) -> Option<&Project> {
        self.projects.get(index).ok()
    }

    fn take_project(&mut self, project: &Project) -> Option<Project> {
        let index = self.projects.index_of(project)?;
        let removed = self.projects.remove_at(index).ok()?;
        self.total_projects -= 1;
        tracing::debug!(index, class = removed.class_name(), "removed active project");
        Some(removed)
    }
}
