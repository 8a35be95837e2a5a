use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum_macros::{AsRefStr, EnumIter};

/// One entry of the navigation table. Entries carrying `routes` are groups,
/// whatever their `path` says; everything else is a navigable leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub label: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteEntry>>,
}

impl RouteEntry {
    pub fn leaf(label: &str, path: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            path: path.to_string(),
            routes: None,
        }
    }

    pub fn group(label: &str, routes: Vec<RouteEntry>) -> Self {
        Self {
            label: Some(label.to_string()),
            path: String::new(),
            routes: Some(routes),
        }
    }

    pub fn is_group(&self) -> bool {
        self.routes.is_some()
    }

    /// A leaf is active on an exact path match, a group when any of its
    /// entries is.
    pub fn is_active(&self, current_path: &str) -> bool {
        match &self.routes {
            Some(routes) => routes.iter().any(|route| route.path == current_path),
            None => self.path == current_path,
        }
    }
}

static ROUTES: LazyLock<Vec<RouteEntry>> = LazyLock::new(|| {
    vec![
        RouteEntry::leaf("Home", "/"),
        RouteEntry::leaf("Projects", "/projects"),
        RouteEntry::leaf("AI hub", "/ai-hub"),
        RouteEntry::leaf("Gen AI studio", "/gen-ai-studio"),
        RouteEntry::leaf("Develop & train", "/develop-train"),
        RouteEntry::leaf("Observe & monitor", "/observe-monitor"),
        RouteEntry::leaf("Learning resources", "/learning-resources"),
        RouteEntry::leaf("Applications", "/applications"),
        RouteEntry::group(
            "Settings",
            vec![
                RouteEntry::leaf("Cluster settings", "/settings/cluster"),
                RouteEntry::leaf("User management", "/settings/users"),
            ],
        ),
    ]
});

pub fn route_table() -> &'static [RouteEntry] {
    ROUTES.as_slice()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Icon {
    Home,
    Folder,
    Lightbulb,
    Flask,
    List,
    Code,
    Cog,
}

/// Decorative icon for a navigation label. Labels outside the table get none.
pub fn icon_for_label(label: &str) -> Option<Icon> {
    match label {
        "Home" => Some(Icon::Home),
        "Projects" => Some(Icon::Folder),
        "AI hub" | "Gen AI studio" => Some(Icon::Lightbulb),
        "Develop & train" | "Observe & monitor" => Some(Icon::Flask),
        "Learning resources" => Some(Icon::List),
        "Applications" => Some(Icon::Code),
        "Settings" => Some(Icon::Cog),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub path: String,
    pub icon: Option<Icon>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Group {
        id: String,
        label: String,
        active: bool,
        links: Vec<NavLink>,
    },
}

#[cfg(test)]
impl NavItem {
    pub fn id(&self) -> &str {
        match self {
            NavItem::Link(link) => &link.id,
            NavItem::Group { id, .. } => id,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            NavItem::Link(link) => link.active,
            NavItem::Group { active, .. } => *active,
        }
    }
}

fn nav_link(route: &RouteEntry, label: &str, index: usize, current_path: &str) -> NavLink {
    NavLink {
        id: format!("nav-item-{label}-{index}"),
        label: label.to_string(),
        path: route.path.clone(),
        icon: icon_for_label(label),
        active: route.path == current_path,
    }
}

/// Resolves the route table against the current location. Entries without a
/// label are left out of the navigation.
pub fn nav_items(routes: &[RouteEntry], current_path: &str) -> Vec<NavItem> {
    routes
        .iter()
        .enumerate()
        .filter_map(|(index, route)| {
            let label = route.label.as_deref()?;
            Some(match &route.routes {
                None => NavItem::Link(nav_link(route, label, index, current_path)),
                Some(children) => NavItem::Group {
                    id: format!("nav-group-{label}-{index}"),
                    label: label.to_string(),
                    active: route.is_active(current_path),
                    links: children
                        .iter()
                        .enumerate()
                        .filter_map(|(index, child)| {
                            let label = child.label.as_deref()?;
                            Some(nav_link(child, label, index, current_path))
                        })
                        .collect(),
                },
            })
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Open,
    Closed,
}

impl SidebarState {
    pub fn toggle(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Closed,
            SidebarState::Closed => SidebarState::Open,
        }
    }

    pub fn is_open(self) -> bool {
        self == SidebarState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn develop_group() -> Vec<RouteEntry> {
        vec![RouteEntry::group("Develop & train", vec![RouteEntry::leaf("X", "/x")])]
    }

    #[test]
    fn leaf_inside_group_activates_group() {
        let items = nav_items(&develop_group(), "/x");
        let NavItem::Group { active, links, id, .. } = &items[0] else {
            panic!("expected a group, got {items:?}");
        };
        assert!(*active);
        assert!(links[0].active);
        assert_eq!(id, "nav-group-Develop & train-0");
        assert_eq!(links[0].id, "nav-item-X-0");
    }

    #[test]
    fn group_inactive_elsewhere() {
        let items = nav_items(&develop_group(), "/y");
        assert!(!items[0].is_active());
    }

    #[test]
    fn exact_match_only() {
        let routes = vec![RouteEntry::leaf("Projects", "/projects")];
        assert!(nav_items(&routes, "/projects")[0].is_active());
        assert!(!nav_items(&routes, "/projects/project-1")[0].is_active());
        assert!(!nav_items(&routes, "/project")[0].is_active());
    }

    #[test]
    fn routes_make_a_group_even_with_path() {
        let mut entry = RouteEntry::group("Settings", vec![RouteEntry::leaf("Cluster settings", "/settings/cluster")]);
        entry.path = "/settings".to_string();
        assert!(entry.is_group());
        assert!(!entry.is_active("/settings"));
        assert!(matches!(nav_items(&[entry], "/settings")[0], NavItem::Group { .. }));
    }

    #[test]
    fn hidden_child_still_activates_group() {
        let routes = vec![RouteEntry::group(
            "Develop & train",
            vec![RouteEntry {
                label: None,
                path: "/x".to_string(),
                routes: None,
            }],
        )];
        let items = nav_items(&routes, "/x");
        let NavItem::Group { active, links, .. } = &items[0] else {
            panic!("expected a group, got {items:?}");
        };
        assert!(*active);
        assert!(links.is_empty());
    }

    #[test]
    fn unlabeled_entries_are_hidden() {
        let routes = vec![
            RouteEntry {
                label: None,
                path: "/hidden".to_string(),
                routes: None,
            },
            RouteEntry::leaf("Home", "/"),
        ];
        let items = nav_items(&routes, "/");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "nav-item-Home-1");
    }

    #[test]
    fn icons_follow_labels() {
        let items = nav_items(route_table(), "/");
        let NavItem::Link(home) = &items[0] else {
            panic!("home should be a link");
        };
        assert_eq!(home.icon, Some(Icon::Home));
        assert!(home.active);
        assert_eq!(icon_for_label("Gen AI studio"), Some(Icon::Lightbulb));
        assert_eq!(icon_for_label("Cluster settings"), None);
        assert_eq!(Icon::Lightbulb.as_ref(), "lightbulb");
    }

    #[test]
    fn every_icon_is_reachable() {
        let labels = [
            "Home",
            "Projects",
            "AI hub",
            "Develop & train",
            "Learning resources",
            "Applications",
            "Settings",
        ];
        let mapped: Vec<_> = labels.iter().filter_map(|label| icon_for_label(label)).collect();
        assert_eq!(mapped, Icon::iter().collect::<Vec<_>>());
    }

    #[test]
    fn route_table_paths_are_unique() {
        let mut paths: Vec<_> = route_table()
            .iter()
            .flat_map(|route| match &route.routes {
                Some(routes) => routes.iter().collect::<Vec<_>>(),
                None => vec![route],
            })
            .map(|route| route.path.as_str())
            .collect();
        let count = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), count);
    }

    #[test]
    fn sidebar_toggles() {
        let sidebar = SidebarState::default();
        assert!(sidebar.is_open());
        let sidebar = sidebar.toggle();
        assert_eq!(sidebar, SidebarState::Closed);
        assert!(sidebar.toggle().is_open());
    }

    #[test]
    fn route_entry_from_json() {
        let entry: RouteEntry = serde_json::from_str(
            r#"{"label":"Develop & train","routes":[{"label":"X","path":"/x"}]}"#,
        )
        .unwrap();
        assert!(entry.is_group());
        assert!(entry.is_active("/x"));
    }
}
