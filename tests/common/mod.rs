//! Common test utilities for integration tests

use chrono::NaiveDate;
use project_tracker::{Calendar, Priority, Project, ProjectTracker, TrackerConfig, TrackerShell};

/// Shorthand for a calendar date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed "today" shared by the tests
pub fn today() -> NaiveDate {
    date(2030, 1, 10)
}

/// Calendar with the default MM/dd/yyyy format pinned to `today()`
pub fn test_calendar() -> Calendar {
    Calendar::fixed(today())
}

/// Empty tracker on the test calendar
#[allow(dead_code)]
pub fn get_test_tracker() -> ProjectTracker {
    ProjectTracker::with_calendar(test_calendar())
}

/// Shell with default configuration on the test calendar
#[allow(dead_code)]
pub fn get_test_shell() -> TrackerShell {
    TrackerShell::with_calendar(TrackerConfig::default(), test_calendar())
}

/// Create a project, created "today", with default priority
#[allow(dead_code)]
pub fn create_test_project(class_name: &str, due_date: &str, description: &str) -> Project {
    Project::new(class_name, due_date, description, &test_calendar()).unwrap()
}

/// Create a project with the given priority
#[allow(dead_code)]
pub fn create_prioritized_project(
    class_name: &str,
    due_date: &str,
    description: &str,
    priority: Priority,
) -> Project {
    let calendar = test_calendar();
    let mut project = Project::new(class_name, due_date, description, &calendar).unwrap();
    project.set_priority(priority, &calendar);
    project
}

/// Create a project that was valid on `created` (e.g. before `today()`)
#[allow(dead_code)]
pub fn create_project_on(
    created: NaiveDate,
    class_name: &str,
    due_date: &str,
    description: &str,
) -> Project {
    Project::new(class_name, due_date, description, &Calendar::fixed(created)).unwrap()
}

/// Class names of a project snapshot, in order
pub fn class_names(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.class_name().to_string()).collect()
}
