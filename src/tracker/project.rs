use crate::calendar::Calendar;
use crate::error::{Result, TrackerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Project priority
///
/// Declaration order is the sort order: `High < Medium < Low`, so sorting
/// ascending puts high-priority work first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        f.write_str(label)
    }
}

impl FromStr for Priority {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(TrackerError::invalid(format!(
                "Invalid priority '{}'. Valid options are: high, medium, low",
                s
            ))),
        }
    }
}

/// Derived, read-only project status
///
/// Only the completed flag is stored; `Overdue` is a view computed against
/// the calendar's current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Pending,
    Overdue,
    Completed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::Pending => "Pending",
            ProjectStatus::Overdue => "OVERDUE",
            ProjectStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// An academic project (assignment)
///
/// Fields are only changed through setters that validate first and then
/// refresh `last_modified`. Equality and hashing use the
/// (class name, due date, description) triple only.
#[derive(Debug, Clone)]
pub struct Project {
    class_name: String,
    due_date: NaiveDate,
    description: String,
    completed: bool,
    priority: Priority,
    time_estimate: String,
    actual_time: String,
    last_modified: NaiveDate,
}

impl Project {
    /// Create a project, parsing `due_date` with the calendar's format
    ///
    /// Fails with `InvalidArgument` for a blank class name or description,
    /// an unparseable date, or a due date before today.
    pub fn new(
        class_name: &str,
        due_date: &str,
        description: &str,
        calendar: &Calendar,
    ) -> Result<Self> {
        validate_class_name(class_name)?;
        validate_description(description)?;
        let due_date = parse_due_date(due_date, calendar)?;
        Ok(Self {
            class_name: class_name.to_string(),
            due_date,
            description: description.to_string(),
            completed: false,
            priority: Priority::default(),
            time_estimate: "0".to_string(),
            actual_time: "0".to_string(),
            last_modified: calendar.today(),
        })
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn set_class_name(&mut self, class_name: &str, calendar: &Calendar) -> Result<()> {
        validate_class_name(class_name)?;
        self.class_name = class_name.to_string();
        self.touch(calendar);
        Ok(())
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Set a new due date; past dates are rejected against today
    pub fn set_due_date(&mut self, due_date: &str, calendar: &Calendar) -> Result<()> {
        self.due_date = parse_due_date(due_date, calendar)?;
        self.touch(calendar);
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str, calendar: &Calendar) -> Result<()> {
        validate_description(description)?;
        self.description = description.to_string();
        self.touch(calendar);
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool, calendar: &Calendar) {
        self.completed = completed;
        self.touch(calendar);
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Priority, calendar: &Calendar) {
        self.priority = priority;
        self.touch(calendar);
    }

    /// Estimated hours, as a string of digits
    pub fn time_estimate(&self) -> &str {
        &self.time_estimate
    }

    pub fn set_time_estimate(&mut self, hours: &str, calendar: &Calendar) -> Result<()> {
        validate_hours(hours, "Time estimate")?;
        self.time_estimate = hours.to_string();
        self.touch(calendar);
        Ok(())
    }

    /// Hours actually spent, as a string of digits
    pub fn actual_time(&self) -> &str {
        &self.actual_time
    }

    pub fn set_actual_time(&mut self, hours: &str, calendar: &Calendar) -> Result<()> {
        validate_hours(hours, "Actual time")?;
        self.actual_time = hours.to_string();
        self.touch(calendar);
        Ok(())
    }

    pub fn last_modified(&self) -> NaiveDate {
        self.last_modified
    }

    /// Calendar days from today until the due date; negative once overdue
    pub fn days_remaining(&self, calendar: &Calendar) -> i64 {
        (self.due_date - calendar.today()).num_days()
    }

    pub fn is_overdue(&self, calendar: &Calendar) -> bool {
        !self.completed && calendar.today() > self.due_date
    }

    pub fn status(&self, calendar: &Calendar) -> ProjectStatus {
        if self.completed {
            ProjectStatus::Completed
        } else if self.is_overdue(calendar) {
            ProjectStatus::Overdue
        } else {
            ProjectStatus::Pending
        }
    }

    /// One-line rendering with fields in a fixed order:
    /// class, due date, priority, status, estimate, actual, description
    pub fn render(&self, calendar: &Calendar) -> String {
        format!(
            "Class: {} | Due: {} | Priority: {} | Status: {} | Time Est: {}h | Actual: {}h | Description: {}",
            self.class_name,
            calendar.format_date(self.due_date),
            self.priority,
            self.status(calendar),
            self.time_estimate,
            self.actual_time,
            self.description
        )
    }

    fn touch(&mut self, calendar: &Calendar) {
        self.last_modified = calendar.today();
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name
            && self.due_date == other.due_date
            && self.description == other.description
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class_name.hash(state);
        self.due_date.hash(state);
        self.description.hash(state);
    }
}

fn validate_class_name(class_name: &str) -> Result<()> {
    if class_name.trim().is_empty() {
        return Err(TrackerError::invalid("Class name cannot be empty"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TrackerError::invalid("Description cannot be empty"));
    }
    Ok(())
}

fn parse_due_date(input: &str, calendar: &Calendar) -> Result<NaiveDate> {
    let date = calendar.parse_date(input)?;
    if date < calendar.today() {
        return Err(TrackerError::invalid("Due date cannot be in the past"));
    }
    Ok(date)
}

/// Hours must be one or more ASCII digits
fn validate_hours(hours: &str, field: &str) -> Result<()> {
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TrackerError::invalid(format!(
            "{} must be a non-negative whole number",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> Calendar {
        Calendar::fixed(date(2030, 1, 15))
    }

    #[test]
    fn test_new_project_defaults() {
        let cal = calendar();
        let project = Project::new("CS101", "12/31/2099", "Homework", &cal).unwrap();
        assert_eq!(project.class_name(), "CS101");
        assert_eq!(project.due_date(), date(2099, 12, 31));
        assert_eq!(project.description(), "Homework");
        assert!(!project.is_completed());
        assert_eq!(project.priority(), Priority::Medium);
        assert_eq!(project.time_estimate(), "0");
        assert_eq!(project.actual_time(), "0");
        assert_eq!(project.last_modified(), date(2030, 1, 15));
    }

    #[test]
    fn test_due_today_is_allowed() {
        let cal = calendar();
        let project = Project::new("CS101", "01/15/2030", "Quiz", &cal).unwrap();
        assert_eq!(project.days_remaining(&cal), 0);
        assert_eq!(project.status(&cal), ProjectStatus::Pending);
    }

    #[test]
    fn test_new_project_validation() {
        let cal = calendar();
        let cases = [
            ("", "12/31/2099", "Desc", "Class name cannot be empty"),
            ("   ", "12/31/2099", "Desc", "Class name cannot be empty"),
            ("CS", "12/31/2099", " \t", "Description cannot be empty"),
            ("CS", "13/45/2099", "Desc", "Invalid date format. Use MM/dd/yyyy"),
            ("CS", "01/14/2030", "Desc", "Due date cannot be in the past"),
        ];
        for (class_name, due, description, message) in cases {
            let err = Project::new(class_name, due, description, &cal).unwrap_err();
            assert_eq!(err, TrackerError::InvalidArgument(message.to_string()));
        }
    }

    #[test]
    fn test_setters_refresh_last_modified() {
        let project = Project::new("CS101", "12/31/2099", "Homework", &calendar()).unwrap();
        let later = Calendar::fixed(date(2030, 2, 1));

        let mut p = project.clone();
        p.set_priority(Priority::High, &later);
        assert_eq!(p.priority(), Priority::High);
        assert_eq!(p.last_modified(), date(2030, 2, 1));

        let mut p = project.clone();
        p.set_class_name("CS102", &later).unwrap();
        assert_eq!(p.class_name(), "CS102");
        assert_eq!(p.last_modified(), date(2030, 2, 1));

        let mut p = project.clone();
        p.set_time_estimate("12", &later).unwrap();
        p.set_actual_time("3", &later).unwrap();
        assert_eq!(p.time_estimate(), "12");
        assert_eq!(p.actual_time(), "3");
        assert_eq!(p.last_modified(), date(2030, 2, 1));
    }

    #[test]
    fn test_failed_setter_leaves_project_untouched() {
        let mut project = Project::new("CS101", "12/31/2099", "Homework", &calendar()).unwrap();
        let later = Calendar::fixed(date(2030, 2, 1));

        assert!(project.set_class_name(" ", &later).is_err());
        assert!(project.set_description("", &later).is_err());
        assert!(project.set_due_date("01/31/2030", &later).is_err());
        assert!(project.set_due_date("not a date", &later).is_err());
        assert!(project.set_time_estimate("-1", &later).is_err());
        assert!(project.set_time_estimate("1.5", &later).is_err());
        assert!(project.set_actual_time("", &later).is_err());

        assert_eq!(project.class_name(), "CS101");
        assert_eq!(project.due_date(), date(2099, 12, 31));
        assert_eq!(project.time_estimate(), "0");
        assert_eq!(project.last_modified(), date(2030, 1, 15));
    }

    #[test]
    fn test_set_due_date_checks_against_call_time() {
        let mut project = Project::new("CS101", "12/31/2099", "Homework", &calendar()).unwrap();
        // Valid at construction time, but later than "now" moved forward
        let later = Calendar::fixed(date(2030, 3, 1));
        assert!(project.set_due_date("02/01/2030", &later).is_err());
        project.set_due_date("03/01/2030", &later).unwrap();
        assert_eq!(project.due_date(), date(2030, 3, 1));
    }

    #[test]
    fn test_status_is_derived() {
        let cal = calendar();
        let mut project = Project::new("CS101", "01/20/2030", "Homework", &cal).unwrap();
        assert_eq!(project.status(&cal), ProjectStatus::Pending);
        assert_eq!(project.days_remaining(&cal), 5);

        let after_due = Calendar::fixed(date(2030, 1, 25));
        assert!(project.is_overdue(&after_due));
        assert_eq!(project.status(&after_due), ProjectStatus::Overdue);
        assert_eq!(project.days_remaining(&after_due), -5);

        project.set_completed(true, &after_due);
        assert!(!project.is_overdue(&after_due));
        assert_eq!(project.status(&after_due), ProjectStatus::Completed);
    }

    #[test]
    fn test_days_remaining_spans_months() {
        let cal = calendar();
        let project = Project::new("CS101", "03/17/2030", "Homework", &cal).unwrap();
        // 16 days left in January + 28 in February + 17 in March
        assert_eq!(project.days_remaining(&cal), 61);
    }

    #[test]
    fn test_equality_ignores_mutable_fields() {
        let cal = calendar();
        let a = Project::new("CS101", "12/31/2099", "Homework", &cal).unwrap();
        let mut b = a.clone();
        b.set_priority(Priority::Low, &cal);
        b.set_completed(true, &cal);
        b.set_time_estimate("9", &cal).unwrap();
        assert_eq!(a, b);

        let c = Project::new("CS101", "12/31/2099", "Lab", &cal).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_render_field_order() {
        let cal = calendar();
        let mut project = Project::new("CS101", "12/31/2099", "Homework", &cal).unwrap();
        project.set_priority(Priority::High, &cal);
        project.set_time_estimate("4", &cal).unwrap();
        assert_eq!(
            project.render(&cal),
            "Class: CS101 | Due: 12/31/2099 | Priority: HIGH | Status: Pending | Time Est: 4h | Actual: 0h | Description: Homework"
        );
    }

    #[test]
    fn test_priority_parse_and_order() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
