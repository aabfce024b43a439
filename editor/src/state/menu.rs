//! Admin navigation menu tree.

use crate::state::layout::LayoutAction;

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// One node in the navigation tree. A tree, never a graph — ids are unique
/// and children never reference ancestors. Depth is unbounded; rendering
/// indents per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    #[must_use]
    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), icon: None, children: Vec::new() }
    }

    #[must_use]
    pub fn parent(id: impl Into<String>, label: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self { id: id.into(), label: label.into(), icon: None, children }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first lookup by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Click policy: leaves become the active item, parents only toggle their
/// expansion — a parent is never "active".
#[must_use]
pub fn action_for_click(item: &MenuItem) -> LayoutAction {
    if item.is_leaf() {
        LayoutAction::SetActiveItem(item.id.clone())
    } else {
        LayoutAction::ToggleMenuItem(item.id.clone())
    }
}

/// The stock PageCraft admin navigation.
#[must_use]
pub fn default_admin_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::leaf("dashboard", "Dashboard").with_icon("home"),
        MenuItem::parent(
            "pages",
            "Pages",
            vec![
                MenuItem::leaf("pages-all", "All Pages"),
                MenuItem::leaf("pages-new", "New Page"),
            ],
        )
        .with_icon("file"),
        MenuItem::leaf("widgets", "Widgets").with_icon("grid"),
        MenuItem::parent(
            "settings",
            "Settings",
            vec![
                MenuItem::leaf("settings-general", "General"),
                MenuItem::leaf("settings-team", "Team"),
            ],
        )
        .with_icon("gear"),
    ]
}
