//! Editor state: layout shell reducer and the admin menu tree.

pub mod layout;
pub mod menu;

pub use layout::{LayoutAction, LayoutState, dispatch, reduce};
pub use menu::{MenuItem, action_for_click, default_admin_menu};
