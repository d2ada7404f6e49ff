//! Menu definitions - the static data the sidebar is rendered from.
//!
//! A tree is either the built-in warehouse menu or an operator-supplied
//! YAML/JSON file with the same shape:
//!
//! ```yaml
//! - type: link
//!   id: dashboard
//!   label: Dashboard
//!   icon: fa-gauge
//!   url: /dashboard
//! - type: group
//!   id: inventory
//!   label: Inventory
//!   icon: fa-boxes-stacked
//!   member_pages: [product_edit]
//!   children:
//!     - { id: products, label: Products, icon: fa-box, url: /inventory/products }
//! ```

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{NavError, NavResult};
use crate::models::Role;

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Page id, unique across the whole tree.
    pub id: String,
    pub label: String,
    /// Icon class list (e.g. "fa-box").
    #[serde(default)]
    pub icon: String,
    /// Relative URL of the target page.
    pub url: String,
    /// Minimum role required to see the link (None = everyone).
    ///
    /// Only honoured on top-level links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_role: Option<Role>,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            url: url.into(),
            min_role: None,
        }
    }

    /// Restrict the link to `role` and above.
    pub fn min_role(mut self, role: Role) -> Self {
        self.min_role = Some(role);
        self
    }
}

/// A collapsible section of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_role: Option<Role>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
    /// Page ids that render this group expanded.
    ///
    /// Always includes every child id once the tree is validated.
    #[serde(default)]
    pub member_pages: BTreeSet<String>,
}

impl MenuGroup {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            min_role: None,
            children: Vec::new(),
            member_pages: BTreeSet::new(),
        }
    }

    /// Restrict the whole group to `role` and above.
    pub fn min_role(mut self, role: Role) -> Self {
        self.min_role = Some(role);
        self
    }

    /// Append a child link; its id becomes a member page.
    pub fn child(mut self, item: MenuItem) -> Self {
        self.member_pages.insert(item.id.clone());
        self.children.push(item);
        self
    }

    /// Mark an extra page (one without its own link) as belonging here.
    pub fn member_page(mut self, page: impl Into<String>) -> Self {
        self.member_pages.insert(page.into());
        self
    }

    /// Whether viewing `page` should expand this group.
    pub fn contains_page(&self, page: &str) -> bool {
        self.member_pages.contains(page)
    }
}

/// A top-level sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MenuEntry {
    Link(MenuItem),
    Group(MenuGroup),
}

impl MenuEntry {
    pub fn id(&self) -> &str {
        match self {
            MenuEntry::Link(item) => &item.id,
            MenuEntry::Group(group) => &group.id,
        }
    }

    pub fn min_role(&self) -> Option<Role> {
        match self {
            MenuEntry::Link(item) => item.min_role,
            MenuEntry::Group(group) => group.min_role,
        }
    }
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        MenuEntry::Link(item)
    }
}

impl From<MenuGroup> for MenuEntry {
    fn from(group: MenuGroup) -> Self {
        MenuEntry::Group(group)
    }
}

/// The ordered, validated menu tree.
///
/// Only constructed through [`MenuTree::new`] and the loaders, so the id
/// invariants always hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    /// Build a tree from entries, normalizing group membership and
    /// rejecting duplicate or empty ids.
    pub fn new(entries: Vec<MenuEntry>) -> NavResult<Self> {
        let mut tree = Self { entries };
        tree.validate()?;
        Ok(tree)
    }

    /// Parse a YAML menu definition.
    pub fn from_yaml_str(yaml: &str) -> NavResult<Self> {
        let entries: Vec<MenuEntry> = serde_yml::from_str(yaml)?;
        Self::new(entries)
    }

    /// Parse a JSON menu definition.
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let entries: Vec<MenuEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a menu definition file, choosing the format by extension.
    pub fn load(path: &Path) -> NavResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| NavError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let tree = match extension.as_deref() {
            Some("yml" | "yaml") => Self::from_yaml_str(&contents(path)?)?,
            Some("json") => Self::from_json_str(&contents(path)?)?,
            _ => {
                return Err(NavError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        debug!(path = %path.display(), entries = tree.len(), "loaded menu definition");
        Ok(tree)
    }

    fn validate(&mut self) -> NavResult<()> {
        let mut seen = HashSet::new();
        let mut claim = |id: &str, context: &str| -> NavResult<()> {
            if id.is_empty() {
                return Err(NavError::EmptyId {
                    context: context.to_string(),
                });
            }
            if !seen.insert(id.to_string()) {
                return Err(NavError::DuplicateId { id: id.to_string() });
            }
            Ok(())
        };

        for entry in &mut self.entries {
            match entry {
                MenuEntry::Link(item) => claim(&item.id, "top-level link")?,
                MenuEntry::Group(group) => {
                    claim(&group.id, "group")?;
                    for child in &group.children {
                        claim(&child.id, &format!("group '{}'", group.id))?;
                        if child.min_role.is_some() {
                            warn!(
                                group = %group.id,
                                item = %child.id,
                                "role restriction on a group child is ignored"
                            );
                        }
                    }
                    let child_ids: Vec<String> =
                        group.children.iter().map(|c| c.id.clone()).collect();
                    group.member_pages.extend(child_ids);
                }
            }
        }

        self.check_member_pages()
    }

    /// Every page may expand at most one group, and a group may only claim
    /// link ids of its own children.
    fn check_member_pages(&self) -> NavResult<()> {
        // id -> owning entry (the group for children, the link itself otherwise)
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for entry in &self.entries {
            owners.insert(entry.id(), entry.id());
            if let MenuEntry::Group(group) = entry {
                for child in &group.children {
                    owners.insert(&child.id, &group.id);
                }
            }
        }

        let mut claimed: HashMap<&str, &str> = HashMap::new();
        for group in self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Group(group) => Some(group),
            MenuEntry::Link(_) => None,
        }) {
            for page in &group.member_pages {
                let conflict = match (owners.get(page.as_str()), claimed.get(page.as_str())) {
                    (Some(owner), _) if *owner != group.id => Some(*owner),
                    (_, Some(other)) => Some(*other),
                    _ => None,
                };
                if let Some(owner) = conflict {
                    return Err(NavError::ConflictingMemberPage {
                        group: group.id.clone(),
                        page: page.clone(),
                        owner: owner.to_string(),
                    });
                }
                claimed.insert(page, &group.id);
            }
        }

        Ok(())
    }

    /// Top-level entries in definition order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Every id in the tree (groups, links and children) in definition order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        for entry in &self.entries {
            ids.push(entry.id());
            if let MenuEntry::Group(group) = entry {
                ids.extend(group.children.iter().map(|c| c.id.as_str()));
            }
        }
        ids
    }

    /// Find a link (top-level or child) by id.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Link(item) if item.id == id => Some(item),
            MenuEntry::Link(_) => None,
            MenuEntry::Group(group) => group.children.iter().find(|c| c.id == id),
        })
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn group_builder_tracks_members() {
        let group = MenuGroup::new("inventory", "Inventory", "")
            .child(MenuItem::new("products", "Products", "", "/products"))
            .member_page("product_edit");

        assert!(group.contains_page("products"));
        assert!(group.contains_page("product_edit"));
        assert!(!group.contains_page("inventory"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = MenuTree::new(vec![
            MenuItem::new("dashboard", "Dashboard", "", "/").into(),
            MenuGroup::new("misc", "Misc", "")
                .child(MenuItem::new("dashboard", "Again", "", "/again"))
                .into(),
        ]);

        match result {
            Err(NavError::DuplicateId { id }) => assert_eq!(id, "dashboard"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn group_id_collides_with_child_id() {
        let result = MenuTree::new(vec![
            MenuGroup::new("reports", "Reports", "")
                .child(MenuItem::new("reports", "Reports", "", "/reports"))
                .into(),
        ]);
        assert!(matches!(result, Err(NavError::DuplicateId { .. })));
    }

    #[test]
    fn member_page_of_another_group_is_rejected() {
        let result = MenuTree::new(vec![
            MenuGroup::new("sales", "Sales", "")
                .child(MenuItem::new("quotations", "Quotations", "", "/sales/quotations"))
                .member_page("invoice_view")
                .into(),
            MenuGroup::new("purchase", "Purchases", "")
                .member_page("invoice_view")
                .into(),
        ]);

        match result {
            Err(NavError::ConflictingMemberPage { group, page, owner }) => {
                assert_eq!(group, "purchase");
                assert_eq!(page, "invoice_view");
                assert_eq!(owner, "sales");
            }
            other => panic!("expected conflicting member page, got {other:?}"),
        }
    }

    #[test]
    fn own_children_and_extra_pages_are_accepted() {
        let tree = MenuTree::new(vec![
            MenuItem::new("dashboard", "Dashboard", "", "/").into(),
            MenuGroup::new("stock", "Stock", "")
                .child(MenuItem::new("items", "Items", "", "/stock/items"))
                .member_page("items")
                .member_page("item_edit")
                .into(),
        ]);
        assert!(tree.is_ok());
    }

    #[test]
    fn empty_ids_are_rejected() {
        let result = MenuTree::new(vec![MenuItem::new("", "Nothing", "", "/").into()]);
        assert!(matches!(result, Err(NavError::EmptyId { .. })));
    }

    #[test]
    fn yaml_definition_parses() {
        let yaml = r#"
- type: link
  id: dashboard
  label: Dashboard
  url: /dashboard
- type: group
  id: inventory
  label: Inventory
  icon: fa-boxes
  member_pages: [product_edit]
  children:
    - { id: products, label: Products, url: /inventory/products }
- type: link
  id: users
  label: Users
  url: /users
  min_role: admin
"#;
        let tree = MenuTree::from_yaml_str(yaml).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.ids(), vec!["dashboard", "inventory", "products", "users"]);
        assert_eq!(tree.entries()[2].min_role(), Some(Role::Admin));

        let MenuEntry::Group(group) = &tree.entries()[1] else {
            panic!("expected group");
        };
        // child ids are folded into the member set during validation
        assert!(group.contains_page("products"));
        assert!(group.contains_page("product_edit"));
    }

    #[test]
    fn json_definition_parses() {
        let json = r#"[
            {"type": "link", "id": "dashboard", "label": "Dashboard", "url": "/"},
            {"type": "group", "id": "reports", "label": "Reports", "min_role": "manager",
             "children": [{"id": "sales_report", "label": "Sales", "url": "/reports/sales"}]}
        ]"#;
        let tree = MenuTree::from_json_str(json).unwrap();

        assert_eq!(tree.entries()[1].min_role(), Some(Role::Manager));
        assert_eq!(tree.find("sales_report").unwrap().url, "/reports/sales");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = MenuTree::from_json_str(r#"[{"type": "widget", "id": "x"}]"#);
        assert!(matches!(result, Err(NavError::Json(_))));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let result = MenuTree::load(Path::new("menu.toml"));
        assert!(matches!(result, Err(NavError::UnsupportedFormat { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = MenuTree::load(Path::new("/nonexistent/stockroom/menu.yml"));
        assert!(matches!(result, Err(NavError::Io { .. })));
    }

    #[test]
    fn find_misses_groups() {
        let tree = MenuTree::new(vec![
            MenuGroup::new("sales", "Sales", "")
                .child(MenuItem::new("quotations", "Quotations", "", "/sales/quotations"))
                .into(),
        ])
        .unwrap();

        assert!(tree.find("sales").is_none());
        assert!(tree.find("quotations").is_some());
    }
}
