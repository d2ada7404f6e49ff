//! Menu definitions for the sidebar.
//!
//! The tree is static configuration:
//! - the built-in warehouse menu from [`default_menu`]
//! - or an operator-supplied YAML/JSON file loaded with [`MenuTree::load`]
//!
//! Visibility is declared per top-level entry as a minimum [`Role`](crate::models::Role).

mod defaults;
mod definition;

pub use defaults::{default_entries, default_menu};
pub use definition::{MenuEntry, MenuGroup, MenuItem, MenuTree};
