//! Queries and sorts for ProjectTracker
//!
//! Every query returns a freshly collected snapshot and leaves the tracker
//! untouched. The two sorts rebuild the active array from a stably sorted
//! copy, so projects with equal keys keep their relative order.

use super::project::{Priority, Project};
use super::project_tracker::ProjectTracker;
use crate::collections::GrowableArray;
use chrono::{Duration, NaiveDate};
use std::cmp::Ordering;
use std::fmt;

/// Canned views over the active projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectView {
    #[default]
    All,
    HighPriority,
    /// Due within the given number of days
    DueWithin(i64),
    Overdue,
}

/// Project counts, rendered as the tracker's status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl fmt::Display for TrackerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Projects: {} | Active: {} | Completed: {}",
            self.total, self.active, self.completed
        )
    }
}

impl ProjectTracker {
    /// Sort active projects by due date, earliest first
    pub fn sort_projects(&mut self) {
        self.rebuild_sorted(|a, b| a.due_date().cmp(&b.due_date()));
    }

    /// Sort active projects by priority, high first
    pub fn sort_by_priority(&mut self) {
        self.rebuild_sorted(|a, b| a.priority().cmp(&b.priority()));
    }

    pub fn filter_by_priority(&self, priority: Priority) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.priority() == priority)
            .collect()
    }

    /// Active projects due on or before today plus `days`
    ///
    /// Overdue projects are included, as their due date is before the cutoff.
    /// A window reaching past the representable calendar saturates at its end.
    pub fn get_projects_due_within(&self, days: i64) -> Vec<&Project> {
        let cutoff = Duration::try_days(days)
            .and_then(|window| self.calendar.today().checked_add_signed(window))
            .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
        self.projects
            .iter()
            .filter(|p| p.due_date() <= cutoff)
            .collect()
    }

    pub fn get_overdue_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.is_overdue(&self.calendar))
            .collect()
    }

    /// Case-insensitive substring search over class names
    ///
    /// A blank term matches nothing.
    pub fn search_by_class_name(&self, term: &str) -> Vec<&Project> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let term_lower = term.to_lowercase();
        self.projects
            .iter()
            .filter(|p| p.class_name().to_lowercase().contains(&term_lower))
            .collect()
    }

    pub fn view(&self, view: ProjectView) -> Vec<&Project> {
        match view {
            ProjectView::All => self.get_projects(),
            ProjectView::HighPriority => self.filter_by_priority(Priority::High),
            ProjectView::DueWithin(days) => self.get_projects_due_within(days),
            ProjectView::Overdue => self.get_overdue_projects(),
        }
    }

    pub fn stats(&self) -> TrackerStats {
        TrackerStats {
            total: self.get_total_projects(),
            active: self.get_active_project_count(),
            completed: self.get_completed_project_count(),
        }
    }

    fn rebuild_sorted<F>(&mut self, compare: F)
    where
        F: FnMut(&Project, &Project) -> Ordering,
    {
        let mut sorted: Vec<Project> = std::mem::take(&mut self.projects).into_iter().collect();
        sorted.sort_by(compare);
        self.projects = sorted.into_iter().collect::<GrowableArray<_>>();
    }
}
