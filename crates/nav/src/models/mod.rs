//! Per-request inputs to the navigation renderer.

pub mod role;
pub mod view_state;

pub use role::Role;
pub use view_state::ViewState;
