//! Formatting helpers for shell output

use crate::calendar::Calendar;
use crate::tracker::Project;

/// Format a project list for display, numbered from 1
///
/// # Arguments
/// * `title` - Heading for the list (e.g. "Active projects")
/// * `projects` - Projects in display order
/// * `calendar` - Calendar used for dates and the derived status
pub fn format_projects(title: &str, projects: &[&Project], calendar: &Calendar) -> String {
    if projects.is_empty() {
        return format!("{}: none", title);
    }

    let mut result = format!("{} ({}):\n", title, projects.len());
    for (i, project) in projects.iter().enumerate() {
        result.push_str(&format!("{}. {}\n", i + 1, project.render(calendar)));
    }
    result.trim_end().to_string()
}

/// Multi-line detail view of a single project
pub fn format_project_detail(project: &Project, calendar: &Calendar) -> String {
    let days = project.days_remaining(calendar);
    let due_in = match days {
        0 => "due today".to_string(),
        1 => "1 day remaining".to_string(),
        d if d > 1 => format!("{} days remaining", d),
        -1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", -d),
    };

    let mut result = project.render(calendar);
    result.push_str(&format!("\n  {}\n", due_in));
    result.push_str(&format!(
        "  Last modified: {}",
        calendar.format_date(project.last_modified())
    ));
    result
}
