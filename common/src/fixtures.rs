use crate::{Project, ProjectSource};
use std::sync::LazyLock;

static MOCK_PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        project(
            "project-1",
            "a project with object storage with an extremely long name so we can test truncation behaviour",
            "DC: UXDPOC6 connects to Object storage, and a model is saved in the path \"/models/fraud/1/model.onnx\"",
            "10/30/2024, 7:26:48 PM",
            (2, 6),
        ),
        project(
            "project-2",
            "Daragh-test",
            "Project to deploy a model",
            "5/8/2025, 7:25:02 PM",
            (0, 0),
        ),
        project("project-3", "dedicated-admin", "", "10/31/2025, 2:59:17 AM", (0, 0)),
        project("project-4", "Feast", "", "8/20/2025, 4:48:11 PM", (0, 0)),
        project("project-5", "haley-test", "", "4/9/2025, 2:52:01 PM", (0, 0)),
        project("project-6", "istio-system", "", "10/3/2024, 4:31:24 AM", (0, 0)),
        project("project-7", "Jenn", "", "7/16/2025, 5:23:20 AM", (0, 0)),
    ]
});

fn project(
    id: &str,
    name: &str,
    description: &str,
    created_at: &str,
    (workbench_running, workbench_stopped): (u32, u32),
) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        owner: "cluster-admin".to_string(),
        description: description.to_string(),
        created_at: created_at.to_string(),
        workbench_running,
        workbench_stopped,
    }
}

/// Static project list standing in for a data-fetching layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockProjects;

impl ProjectSource for MockProjects {
    fn projects(&self) -> &[Project] {
        MOCK_PROJECTS.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = MockProjects.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), MockProjects.projects().len());
    }

    #[test]
    fn fixture_order() {
        let names: Vec<_> = MockProjects.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 7);
        assert_eq!(names[1..], ["Daragh-test", "dedicated-admin", "Feast", "haley-test", "istio-system", "Jenn"]);
    }
}
