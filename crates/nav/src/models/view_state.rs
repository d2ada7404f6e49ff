//! Request-scoped view state.

use serde::Serialize;

use super::Role;

/// Everything the renderer needs to know about the current request.
///
/// Built by the hosting application from its session for each page and
/// discarded after rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Id of the page being viewed; empty when unknown.
    pub current_page: String,
    pub role: Role,
    /// Untrusted display name of the logged-in user.
    pub display_name: String,
}

impl ViewState {
    pub fn new(
        current_page: impl Into<String>,
        role: impl Into<Role>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            current_page: current_page.into(),
            role: role.into(),
            display_name: display_name.into(),
        }
    }

    /// Whether `id` names the page being viewed.
    ///
    /// An empty current page never matches, so an unset page leaves
    /// nothing active.
    pub fn is_current(&self, id: &str) -> bool {
        !self.current_page.is_empty() && self.current_page == id
    }
}
