//! Sort handler for the tracker shell

use crate::TrackerShell;
use crate::command::SortKey;
use crate::formatting;

impl TrackerShell {
    /// Sorts the active list in place and shows it in the new order,
    /// followed by the stats line.
    pub fn handle_sort(&mut self, by: SortKey) -> String {
        let title = match by {
            SortKey::Due => {
                self.tracker.sort_projects();
                "Active projects by due date"
            }
            SortKey::Priority => {
                self.tracker.sort_by_priority();
                "Active projects by priority"
            }
        };
        tracing::debug!(?by, "sorted active projects");
        let projects = self.tracker.get_projects();
        format!(
            "{}\n{}",
            formatting::format_projects(title, &projects, self.tracker.calendar()),
            self.tracker.stats()
        )
    }
}
