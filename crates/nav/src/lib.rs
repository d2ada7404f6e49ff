//! Stockroom navigation sidebar.
//!
//! Derives a role-aware navigation view from a static menu tree and the
//! current request, and renders it with Tera. The `stockroom-nav` binary is
//! a preview tool built on the same library.

pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod theme;
pub mod view;

pub use error::{NavError, NavResult};
pub use menu::{MenuEntry, MenuGroup, MenuItem, MenuTree, default_menu};
pub use models::{Role, ViewState};
pub use theme::ThemeEngine;
pub use view::{NavEntry, NavGroup, NavHeader, NavLink, NavView};
