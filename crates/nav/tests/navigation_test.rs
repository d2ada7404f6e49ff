#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Navigation view tests against the built-in warehouse menu.

use stockroom_nav::{NavEntry, NavView, Role, ViewState, default_menu};
use stockroom_test_utils::{admin_on, assert, manager_on, staff_on};

const MANAGER_ONLY: &[&str] = &[
    "treasury",
    "cash_boxes",
    "receipts",
    "payments",
    "expenses",
    "reports",
    "sales_report",
    "purchase_report",
    "inventory_report",
    "profit_report",
];
const ADMIN_ONLY: &[&str] = &["users", "settings"];

fn build(state: &ViewState) -> NavView {
    NavView::build(&default_menu(), state)
}

#[test]
fn test_dashboard_is_only_active_item() {
    let view = build(&admin_on("dashboard").state());
    assert::only_active(&view, "dashboard");
    assert::expanded(&view, &[]);
}

#[test]
fn test_products_expands_inventory() {
    let view = build(&admin_on("products").state());
    assert::only_active(&view, "products");
    assert::expanded(&view, &["inventory"]);

    for id in ["sales", "purchase", "contacts", "treasury", "reports"] {
        let group = view.groups().find(|g| g.id == id).unwrap();
        assert!(!group.expanded, "{id} should be collapsed");
    }
}

#[test]
fn test_every_link_activates_alone() {
    let menu = default_menu();
    let admin_view = NavView::build(&menu, &admin_on("").state());
    let ids: Vec<String> = admin_view.links().map(|l| l.id.clone()).collect();

    for id in &ids {
        let view = NavView::build(&menu, &admin_on(id).state());
        assert::only_active(&view, id);

        let expanded: Vec<&str> = view
            .groups()
            .filter(|g| g.expanded)
            .map(|g| g.id.as_str())
            .collect();
        assert!(expanded.len() <= 1, "{id} expanded {expanded:?}");
        if let Some(group) = expanded.first() {
            let owner = view.groups().find(|g| g.id == *group).unwrap();
            assert!(owner.links.iter().any(|l| &l.id == id));
        }
    }
}

#[test]
fn test_staff_sees_no_restricted_items() {
    let view = build(&staff_on("dashboard").state());
    assert::hidden(&view, MANAGER_ONLY);
    assert::hidden(&view, ADMIN_ONLY);
    assert::visible(&view, &["dashboard", "inventory", "products", "sales", "logout"]);
}

#[test]
fn test_manager_sees_manager_items_only() {
    let view = build(&manager_on("dashboard").state());
    assert::visible(&view, MANAGER_ONLY);
    assert::hidden(&view, ADMIN_ONLY);
}

#[test]
fn test_admin_sees_everything() {
    let menu = default_menu();
    let view = NavView::build(&menu, &admin_on("dashboard").state());
    assert::visible(&view, &menu.ids());
    assert_eq!(view.entries.len(), menu.len());
}

#[test]
fn test_unknown_role_is_treated_as_staff() {
    let unknown = build(&ViewState::new("dashboard", "auditor", "Pat"));
    let staff = build(&ViewState::new("dashboard", Role::Staff, "Pat"));
    assert_eq!(unknown, staff);
}

#[test]
fn test_visibility_is_monotonic() {
    let menu = default_menu();
    let staff = NavView::build(&menu, &staff_on("").state());
    let manager = NavView::build(&menu, &manager_on("").state());
    let admin = NavView::build(&menu, &admin_on("").state());

    assert!(staff.links().all(|l| manager.contains(&l.id)));
    assert!(manager.links().all(|l| admin.contains(&l.id)));
    assert!(staff.entries.len() < manager.entries.len());
    assert!(manager.entries.len() < admin.entries.len());
}

#[test]
fn test_order_is_preserved() {
    let view = build(&admin_on("").state());
    let ids: Vec<&str> = view.entries.iter().map(NavEntry::id).collect();
    assert_eq!(
        ids,
        vec![
            "dashboard",
            "inventory",
            "sales",
            "purchase",
            "contacts",
            "treasury",
            "reports",
            "users",
            "settings",
            "logout"
        ]
    );

    let staff_view = build(&staff_on("").state());
    let staff_ids: Vec<&str> = staff_view.entries.iter().map(NavEntry::id).collect();
    assert_eq!(
        staff_ids,
        vec!["dashboard", "inventory", "sales", "purchase", "contacts", "logout"]
    );
}

#[test]
fn test_member_page_without_link() {
    let view = build(&staff_on("product_edit").state());
    assert::expanded(&view, &["inventory"]);
    assert!(view.active_link().is_none());
}

#[test]
fn test_unset_page_activates_nothing() {
    let view = build(&admin_on("").state());
    assert!(view.active_link().is_none());
    assert!(view.expanded_group().is_none());
}

#[test]
fn test_unknown_page_activates_nothing() {
    let view = build(&admin_on("no_such_page").state());
    assert!(view.active_link().is_none());
    assert!(view.expanded_group().is_none());
}

#[test]
fn test_hidden_group_is_not_expanded_for_staff() {
    let view = build(&staff_on("payments").state());
    assert!(view.expanded_group().is_none());
    assert!(view.active_link().is_none());
}

#[test]
fn test_build_is_idempotent() {
    let state = manager_on("receipts").named("Dana").state();
    assert_eq!(build(&state), build(&state));
}

#[test]
fn test_view_serializes_for_json_consumers() {
    let view = build(&staff_on("dashboard").named("Sam").state());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["header"]["display_name"], "Sam");
    assert_eq!(json["header"]["role"], "staff");
    assert_eq!(json["entries"][0]["kind"], "link");
    assert_eq!(json["entries"][0]["active"], true);
    assert_eq!(json["entries"][1]["kind"], "group");
}
