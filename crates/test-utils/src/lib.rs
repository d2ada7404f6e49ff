//! Stockroom test utilities.
//!
//! Helpers for integration testing: request fixtures, a compact menu tree,
//! scratch files, and assertions over rendered navigation views.

use std::path::PathBuf;

use stockroom_nav::{MenuGroup, MenuItem, MenuTree, Role, ViewState};
use uuid::Uuid;

/// Create a test request for the given page and role.
pub fn test_request(page: &str, role: Role) -> TestRequest {
    TestRequest {
        page: page.to_string(),
        role,
        display_name: "Test User".to_string(),
    }
}

/// A staff member viewing `page`.
pub fn staff_on(page: &str) -> TestRequest {
    test_request(page, Role::Staff)
}

/// A manager viewing `page`.
pub fn manager_on(page: &str) -> TestRequest {
    test_request(page, Role::Manager)
}

/// An administrator viewing `page`.
pub fn admin_on(page: &str) -> TestRequest {
    test_request(page, Role::Admin)
}

/// A test request builder.
#[derive(Debug, Clone)]
pub struct TestRequest {
    pub page: String,
    pub role: Role,
    pub display_name: String,
}

impl TestRequest {
    /// Set the display name.
    pub fn named(mut self, name: &str) -> Self {
        self.display_name = name.to_string();
        self
    }

    /// Build the view state handed to the renderer.
    pub fn state(&self) -> ViewState {
        ViewState::new(self.page.as_str(), self.role, self.display_name.as_str())
    }
}

/// A compact menu with one entry of every visibility level.
///
/// `home` (all), `stock` group with `items` (all), `ledger` group with
/// `journal` (manager+), `accounts` link (admin).
pub fn compact_menu() -> MenuTree {
    let entries = vec![
        MenuItem::new("home", "Home", "fa-house", "/").into(),
        MenuGroup::new("stock", "Stock", "fa-box")
            .child(MenuItem::new("items", "Items", "fa-cube", "/stock/items"))
            .into(),
        MenuGroup::new("ledger", "Ledger", "fa-book")
            .min_role(Role::Manager)
            .child(MenuItem::new("journal", "Journal", "fa-pen", "/ledger/journal"))
            .into(),
        MenuItem::new("accounts", "Accounts", "fa-user", "/accounts")
            .min_role(Role::Admin)
            .into(),
    ];

    match MenuTree::new(entries) {
        Ok(tree) => tree,
        Err(e) => panic!("compact menu is invalid: {e}"),
    }
}

/// A unique path under the system temp directory.
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("stockroom-{}", Uuid::now_v7()))
        .join(name)
}

/// Write `contents` to a fresh scratch file and return its path.
pub fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = scratch_path(name);
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        panic!("failed to create {}: {e}", parent.display());
    }
    if let Err(e) = std::fs::write(&path, contents) {
        panic!("failed to write {}: {e}", path.display());
    }
    path
}

/// Assertion helpers for navigation views.
pub mod assert {
    use stockroom_nav::NavView;

    /// Assert that exactly one link is active and it is `id`.
    pub fn only_active(view: &NavView, id: &str) {
        let active: Vec<&str> = view
            .links()
            .filter(|l| l.active)
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(active, vec![id], "expected only '{id}' to be active");
    }

    /// Assert that exactly the given groups are expanded.
    pub fn expanded(view: &NavView, ids: &[&str]) {
        let expanded: Vec<&str> = view
            .groups()
            .filter(|g| g.expanded)
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(expanded, ids, "unexpected expanded groups");
    }

    /// Assert that every id is visible.
    pub fn visible(view: &NavView, ids: &[&str]) {
        for id in ids {
            assert!(view.contains(id), "expected '{id}' to be visible");
        }
    }

    /// Assert that no id is visible.
    pub fn hidden(view: &NavView, ids: &[&str]) {
        for id in ids {
            assert!(!view.contains(id), "expected '{id}' to be hidden");
        }
    }
}
