//! List, search and stats handlers for the tracker shell

use crate::TrackerShell;
use crate::command::ViewArg;
use crate::formatting;
use crate::tracker::ProjectView;
use crate::validation;
use anyhow::Result;

impl TrackerShell {
    /// Shows one of the canned views over the active projects.
    pub fn handle_list(&self, view: ViewArg) -> String {
        let (title, view) = match view {
            ViewArg::All => ("Active projects", ProjectView::All),
            ViewArg::High => ("High priority projects", ProjectView::HighPriority),
            ViewArg::Week => (
                "Projects due soon",
                ProjectView::DueWithin(self.config.due_soon_days),
            ),
            ViewArg::Overdue => ("Overdue projects", ProjectView::Overdue),
        };
        let projects = self.tracker.view(view);
        formatting::format_projects(title, &projects, self.tracker.calendar())
    }

    pub fn handle_completed(&self) -> String {
        let projects = self.tracker.get_completed_projects();
        formatting::format_projects("Completed projects", &projects, self.tracker.calendar())
    }

    pub fn handle_show(&self, position: usize) -> Result<String> {
        let index = validation::resolve_position(position, self.tracker.get_active_project_count())?;
        match self.tracker.project_at(index) {
            Some(project) => Ok(formatting::format_project_detail(
                project,
                self.tracker.calendar(),
            )),
            None => anyhow::bail!("No project at position {}", position),
        }
    }

    /// Searches class names; a blank term shows the full active list, like
    /// clearing the search box.
    pub fn handle_search(&self, term: &str) -> String {
        if term.trim().is_empty() {
            return self.handle_list(ViewArg::All);
        }
        let projects = self.tracker.search_by_class_name(term);
        formatting::format_projects(
            &format!("Projects matching '{}'", term),
            &projects,
            self.tracker.calendar(),
        )
    }

    pub fn handle_stats(&self) -> String {
        self.tracker.stats().to_string()
    }
}
