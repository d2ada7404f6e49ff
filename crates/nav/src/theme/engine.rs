//! Theme engine with Tera templates and suggestion resolution.

use std::path::Path;
use std::sync::Arc;

use dashmap::DashMap;
use tera::Tera;
use tracing::{debug, warn};

use crate::error::NavResult;
use crate::models::Role;
use crate::view::NavView;

/// Default viewport width (px) below which the sidebar collapses.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

const SIDEBAR_TEMPLATE: &str = "nav/sidebar";
const STYLESHEET_TEMPLATE: &str = "nav/sidebar.css";
const SCRIPT_TEMPLATE: &str = "nav/sidebar.js";
const FRAGMENT_TEMPLATE: &str = "nav/fragment.html";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "nav/sidebar.html",
        include_str!("../../templates/nav/sidebar.html"),
    ),
    (
        STYLESHEET_TEMPLATE,
        include_str!("../../templates/nav/sidebar.css"),
    ),
    (
        SCRIPT_TEMPLATE,
        include_str!("../../templates/nav/sidebar.js"),
    ),
    (
        FRAGMENT_TEMPLATE,
        include_str!("../../templates/nav/fragment.html"),
    ),
];

/// Theme engine for rendering the sidebar.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
    /// Cache mapping suggestion lists to resolved template names.
    suggestion_cache: DashMap<String, String>,
    /// Width threshold handed to the stylesheet and script.
    mobile_breakpoint: u32,
}

impl ThemeEngine {
    /// Create a theme engine with only the built-in templates.
    pub fn builtin() -> NavResult<Self> {
        Ok(Self::from_tera(Self::builtin_tera()?))
    }

    /// Create a theme engine, letting templates under `template_dir` replace
    /// or extend the built-in ones.
    pub fn new(template_dir: &Path) -> NavResult<Self> {
        if !template_dir.is_dir() {
            warn!(
                dir = %template_dir.display(),
                "template directory not found, using built-in templates"
            );
            return Self::builtin();
        }

        let pattern = template_dir.join("**/*");
        let pattern_str = pattern.to_string_lossy();

        let mut tera = Tera::new(&pattern_str)?;
        let overrides = tera.get_template_names().count();

        // Templates already present in `tera` win over the built-ins.
        tera.extend(&Self::builtin_tera()?)?;
        tera.set_escape_fn(html_escape);

        debug!(
            dir = %template_dir.display(),
            overrides,
            total = tera.get_template_names().count(),
            "loaded templates"
        );

        Ok(Self::from_tera(tera))
    }

    fn from_tera(tera: Tera) -> Self {
        Self {
            tera,
            suggestion_cache: DashMap::new(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }

    fn builtin_tera() -> NavResult<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUILTIN_TEMPLATES.to_vec())?;
        tera.set_escape_fn(html_escape);
        Ok(tera)
    }

    /// Set the width (px) below which outside clicks close the sidebar.
    pub fn with_mobile_breakpoint(mut self, px: u32) -> Self {
        self.mobile_breakpoint = px;
        self
    }

    pub fn mobile_breakpoint(&self) -> u32 {
        self.mobile_breakpoint
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Add or replace a template at runtime.
    pub fn add_raw_template(&mut self, name: &str, content: &str) -> NavResult<()> {
        self.tera.add_raw_template(name, content)?;
        self.clear_cache();
        Ok(())
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    /// Results are cached.
    ///
    /// Example suggestions: `["nav/sidebar--admin", "nav/sidebar"]`
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }

        let cache_key = suggestions.join("|");

        if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            return Some(cached.clone());
        }

        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                self.suggestion_cache.insert(cache_key, template_name.clone());
                return Some(template_name);
            }

            // Also try without .html extension (in case suggestion already has it)
            if self.tera.get_template(suggestion).is_ok() {
                let name = (*suggestion).to_string();
                self.suggestion_cache.insert(cache_key, name.clone());
                return Some(name);
            }
        }

        None
    }

    /// Sidebar template suggestions for a role, most specific first:
    /// `nav/sidebar--{role}`, then `nav/sidebar`.
    pub fn sidebar_suggestions(role: Role) -> Vec<String> {
        vec![
            format!("{SIDEBAR_TEMPLATE}--{}", role.as_str()),
            SIDEBAR_TEMPLATE.to_string(),
        ]
    }

    /// Render the sidebar markup for a view.
    pub fn render_sidebar(&self, view: &NavView) -> NavResult<String> {
        let suggestions = Self::sidebar_suggestions(view.header.role);
        let suggestion_refs: Vec<&str> = suggestions.iter().map(|s| s.as_str()).collect();

        let template = self
            .resolve_template(&suggestion_refs)
            .unwrap_or_else(|| format!("{SIDEBAR_TEMPLATE}.html"));

        let mut context = tera::Context::new();
        context.insert("nav", view);
        context.insert("breakpoint", &self.mobile_breakpoint);

        Ok(self.tera.render(&template, &context)?)
    }

    /// Render the sidebar stylesheet.
    pub fn render_stylesheet(&self) -> NavResult<String> {
        self.render_asset(STYLESHEET_TEMPLATE)
    }

    /// Render the sidebar interaction script.
    pub fn render_script(&self) -> NavResult<String> {
        self.render_asset(SCRIPT_TEMPLATE)
    }

    fn render_asset(&self, template: &str) -> NavResult<String> {
        let mut context = tera::Context::new();
        context.insert("breakpoint", &self.mobile_breakpoint);
        Ok(self.tera.render(template, &context)?)
    }

    /// Render markup, stylesheet and script as one embeddable fragment.
    pub fn render_fragment(&self, view: &NavView) -> NavResult<String> {
        let mut context = tera::Context::new();
        context.insert("sidebar", &self.render_sidebar(view)?);
        context.insert("stylesheet", &self.render_stylesheet()?);
        context.insert("script", &self.render_script()?);

        Ok(self.tera.render(FRAGMENT_TEMPLATE, &context)?)
    }

    /// Clear the suggestion cache (useful for development hot-reload).
    pub fn clear_cache(&self) {
        self.suggestion_cache.clear();
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .field("cache_size", &self.suggestion_cache.len())
            .field("mobile_breakpoint", &self.mobile_breakpoint)
            .finish()
    }
}

/// Wrap ThemeEngine in Arc for sharing across request handlers.
pub type SharedThemeEngine = Arc<ThemeEngine>;

/// Escape text for HTML element content and quoted attributes.
///
/// Unlike Tera's default this leaves `/` alone so URLs stay readable.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
