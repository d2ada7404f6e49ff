//! The built-in warehouse menu.

use crate::models::Role;

use super::definition::{MenuEntry, MenuGroup, MenuItem, MenuTree};

/// Top-level entries of the built-in menu, in display order.
pub fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuItem::new("dashboard", "Dashboard", "fa-gauge", "/dashboard").into(),
        MenuGroup::new("inventory", "Inventory", "fa-boxes-stacked")
            .child(MenuItem::new("products", "Products", "fa-box", "/inventory/products"))
            .child(MenuItem::new(
                "categories",
                "Categories",
                "fa-tags",
                "/inventory/categories",
            ))
            .child(MenuItem::new(
                "warehouses",
                "Warehouses",
                "fa-warehouse",
                "/inventory/warehouses",
            ))
            .child(MenuItem::new(
                "stock_movements",
                "Stock Movements",
                "fa-right-left",
                "/inventory/movements",
            ))
            .child(MenuItem::new(
                "stock_transfers",
                "Stock Transfers",
                "fa-truck-ramp-box",
                "/inventory/transfers",
            ))
            .member_page("product_edit")
            .member_page("product_new")
            .into(),
        MenuGroup::new("sales", "Sales", "fa-cart-shopping")
            .child(MenuItem::new(
                "sales_invoices",
                "Sales Invoices",
                "fa-file-invoice",
                "/sales/invoices",
            ))
            .child(MenuItem::new(
                "sales_returns",
                "Sales Returns",
                "fa-rotate-left",
                "/sales/returns",
            ))
            .child(MenuItem::new(
                "quotations",
                "Quotations",
                "fa-file-lines",
                "/sales/quotations",
            ))
            .member_page("sales_invoice_view")
            .into(),
        MenuGroup::new("purchase", "Purchases", "fa-truck")
            .child(MenuItem::new(
                "purchase_invoices",
                "Purchase Invoices",
                "fa-file-invoice-dollar",
                "/purchases/invoices",
            ))
            .child(MenuItem::new(
                "purchase_returns",
                "Purchase Returns",
                "fa-rotate-right",
                "/purchases/returns",
            ))
            .child(MenuItem::new(
                "purchase_orders",
                "Purchase Orders",
                "fa-clipboard-list",
                "/purchases/orders",
            ))
            .into(),
        MenuGroup::new("contacts", "Contacts", "fa-address-book")
            .child(MenuItem::new("customers", "Customers", "fa-users", "/contacts/customers"))
            .child(MenuItem::new(
                "suppliers",
                "Suppliers",
                "fa-industry",
                "/contacts/suppliers",
            ))
            .into(),
        MenuGroup::new("treasury", "Treasury", "fa-vault")
            .min_role(Role::Manager)
            .child(MenuItem::new(
                "cash_boxes",
                "Cash Boxes",
                "fa-cash-register",
                "/treasury/cash-boxes",
            ))
            .child(MenuItem::new(
                "receipts",
                "Receipts",
                "fa-hand-holding-dollar",
                "/treasury/receipts",
            ))
            .child(MenuItem::new(
                "payments",
                "Payments",
                "fa-money-bill-wave",
                "/treasury/payments",
            ))
            .child(MenuItem::new("expenses", "Expenses", "fa-receipt", "/treasury/expenses"))
            .into(),
        MenuGroup::new("reports", "Reports", "fa-chart-line")
            .min_role(Role::Manager)
            .child(MenuItem::new(
                "sales_report",
                "Sales Report",
                "fa-chart-column",
                "/reports/sales",
            ))
            .child(MenuItem::new(
                "purchase_report",
                "Purchase Report",
                "fa-chart-bar",
                "/reports/purchases",
            ))
            .child(MenuItem::new(
                "inventory_report",
                "Inventory Report",
                "fa-chart-pie",
                "/reports/inventory",
            ))
            .child(MenuItem::new(
                "profit_report",
                "Profit & Loss",
                "fa-scale-balanced",
                "/reports/profit",
            ))
            .into(),
        MenuItem::new("users", "Users", "fa-user-gear", "/users")
            .min_role(Role::Admin)
            .into(),
        MenuItem::new("settings", "Settings", "fa-gear", "/settings")
            .min_role(Role::Admin)
            .into(),
        MenuItem::new("logout", "Log Out", "fa-right-from-bracket", "/logout").into(),
    ]
}

/// The built-in warehouse menu tree.
pub fn default_menu() -> MenuTree {
    // Static ids are unique; an empty tree is only reachable if they stop being so.
    MenuTree::new(default_entries()).unwrap_or_else(|e| {
        tracing::error!(error = %e, "built-in menu failed validation");
        MenuTree::default()
    })
}
