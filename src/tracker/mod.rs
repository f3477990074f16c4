//! Project tracking domain
//!
//! - `project`: the validated `Project` record, `Priority` and the derived `ProjectStatus`
//! - `project_tracker`: `ProjectTracker`, owning active and completed projects
//! - `queries`: read-only filters, searches, views and the in-place sorts

mod project;
mod project_tracker;
mod queries;

pub use project::{Priority, Project, ProjectStatus};
pub use project_tracker::ProjectTracker;
pub use queries::{ProjectView, TrackerStats};
