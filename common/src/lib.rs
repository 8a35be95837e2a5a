pub mod fixtures;
pub mod list_view;
pub mod nav;

use serde::{Deserialize, Serialize};

pub type ProjectId = String;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub owner: String,
    pub description: String,
    /// Already formatted for display, never parsed.
    pub created_at: String,
    pub workbench_running: u32,
    pub workbench_stopped: u32,
}

impl Project {
    pub fn href(&self) -> String {
        format!("/projects/{}", self.id)
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Supplies the records a list view works on. The list view only relies on
/// the sequence being finite and stable in order.
pub trait ProjectSource {
    fn projects(&self) -> &[Project];

    fn find(&self, id: &str) -> Option<&Project> {
        self.projects().iter().find(|project| project.id == id)
    }
}

/// Anything a list view can filter by display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Project {
    fn name(&self) -> &str {
        &self.name
    }
}
