//! Navigation view - the menu tree as seen by one user on one page.
//!
//! [`NavView::build`] is a pure function of the menu tree and the
//! [`ViewState`]: entries are filtered by role, links are marked active and
//! groups expanded by the current page. Definition order is preserved.

use serde::Serialize;

use crate::menu::{MenuEntry, MenuGroup, MenuItem, MenuTree};
use crate::models::{Role, ViewState};

/// A link ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub url: String,
    pub active: bool,
}

impl NavLink {
    fn from_item(item: &MenuItem, state: &ViewState) -> Self {
        Self {
            id: item.id.clone(),
            label: item.label.clone(),
            icon: item.icon.clone(),
            url: item.url.clone(),
            active: state.is_current(&item.id),
        }
    }
}

/// A group ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub expanded: bool,
    pub links: Vec<NavLink>,
}

impl NavGroup {
    fn from_group(group: &MenuGroup, state: &ViewState) -> Self {
        Self {
            id: group.id.clone(),
            label: group.label.clone(),
            icon: group.icon.clone(),
            expanded: !state.current_page.is_empty() && group.contains_page(&state.current_page),
            // children inherit the group's visibility
            links: group
                .children
                .iter()
                .map(|child| NavLink::from_item(child, state))
                .collect(),
        }
    }
}

/// A visible top-level entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    Link(NavLink),
    Group(NavGroup),
}

impl NavEntry {
    pub fn id(&self) -> &str {
        match self {
            NavEntry::Link(link) => &link.id,
            NavEntry::Group(group) => &group.id,
        }
    }
}

/// Sidebar header: who is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavHeader {
    /// Raw display name; escaped by the template layer.
    pub display_name: String,
    pub role: Role,
    pub role_label: &'static str,
}

/// The complete navigation view for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub header: NavHeader,
    pub current_page: String,
    pub entries: Vec<NavEntry>,
}

impl NavView {
    /// Derive the view for `state` from `menu`.
    pub fn build(menu: &MenuTree, state: &ViewState) -> Self {
        let entries = menu
            .entries()
            .iter()
            .filter(|entry| state.role.satisfies(entry.min_role()))
            .map(|entry| match entry {
                MenuEntry::Link(item) => NavEntry::Link(NavLink::from_item(item, state)),
                MenuEntry::Group(group) => NavEntry::Group(NavGroup::from_group(group, state)),
            })
            .collect();

        Self {
            header: NavHeader {
                display_name: state.display_name.clone(),
                role: state.role,
                role_label: state.role.label(),
            },
            current_page: state.current_page.clone(),
            entries,
        }
    }

    /// Every visible link, top-level and nested, in order.
    pub fn links(&self) -> impl Iterator<Item = &NavLink> {
        self.entries.iter().flat_map(|entry| match entry {
            NavEntry::Link(link) => std::slice::from_ref(link).iter(),
            NavEntry::Group(group) => group.links.iter(),
        })
    }

    /// Every visible group, in order.
    pub fn groups(&self) -> impl Iterator<Item = &NavGroup> {
        self.entries.iter().filter_map(|entry| match entry {
            NavEntry::Group(group) => Some(group),
            NavEntry::Link(_) => None,
        })
    }

    /// The link for the page being viewed, if it is visible.
    pub fn active_link(&self) -> Option<&NavLink> {
        self.links().find(|link| link.active)
    }

    /// The group containing the page being viewed, if any.
    pub fn expanded_group(&self) -> Option<&NavGroup> {
        self.groups().find(|group| group.expanded)
    }

    /// Whether an entry or link with `id` is visible.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id() == id) || self.links().any(|link| link.id == id)
    }
}
