//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::menu::{MenuTree, default_menu};
use crate::theme::{DEFAULT_MOBILE_BREAKPOINT, ThemeEngine};

/// Sidebar configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Menu definition file (YAML or JSON). When None, the built-in menu is used.
    pub menu_file: Option<PathBuf>,

    /// Directory of template overrides. When None, only built-ins are used.
    pub template_dir: Option<PathBuf>,

    /// Viewport width (px) below which the sidebar collapses (default: 768).
    pub mobile_breakpoint: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_file: None,
            template_dir: None,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let menu_file = non_empty("NAV_MENU_FILE").map(PathBuf::from);
        let template_dir = non_empty("NAV_TEMPLATE_DIR").map(PathBuf::from);

        let mobile_breakpoint = match non_empty("NAV_MOBILE_BREAKPOINT") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .context("NAV_MOBILE_BREAKPOINT must be a valid u32")?,
            None => DEFAULT_MOBILE_BREAKPOINT,
        };

        Ok(Self {
            menu_file,
            template_dir,
            mobile_breakpoint,
        })
    }

    /// Load the configured menu tree, or the built-in one.
    pub fn load_menu(&self) -> Result<MenuTree> {
        match &self.menu_file {
            Some(path) => {
                let menu = MenuTree::load(path)
                    .with_context(|| format!("failed to load menu from {}", path.display()))?;
                info!(path = %path.display(), entries = menu.len(), "Menu definition loaded");
                Ok(menu)
            }
            None => Ok(default_menu()),
        }
    }

    /// Build the theme engine with the configured overrides and breakpoint.
    pub fn theme_engine(&self) -> Result<ThemeEngine> {
        let engine = match &self.template_dir {
            Some(dir) => ThemeEngine::new(dir)
                .with_context(|| format!("failed to load templates from {}", dir.display()))?,
            None => ThemeEngine::builtin().context("failed to load built-in templates")?,
        };
        Ok(engine.with_mobile_breakpoint(self.mobile_breakpoint))
    }
}
