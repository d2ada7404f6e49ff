//! Sidebar presentation.
//!
//! Tera templates turn a [`NavView`](crate::view::NavView) into markup, and
//! render the stylesheet and interaction script as separate assets so the
//! hosting page can place them where it likes.

mod engine;

pub use engine::{DEFAULT_MOBILE_BREAKPOINT, SharedThemeEngine, ThemeEngine, html_escape};
