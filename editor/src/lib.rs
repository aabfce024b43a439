//! PageCraft editor-builder — the visual editing surface for pages.
//!
//! ARCHITECTURE
//! ============
//! Library of Leptos components plus the pure state they drive:
//!
//! - `state` — the layout/navigation state machine (reducer over a fixed
//!   action vocabulary) and the admin menu tree.
//! - `components::fields` — controlled property inputs. Fields never own
//!   their value; every edit flows through `on_change` and the single source
//!   of truth lives in the parent form state.
//! - `components::layout` — sidebar, header, and recursive menu tree,
//!   including the collapsed-sidebar tooltip/flyout presentation.
//! - `hover` — the flyout hover-intent timing policy, pure and testable.
//! - `dnd` — drag-and-drop scaffold; reorder semantics are an open
//!   requirement and intentionally not implemented here.
//! - `net` — thin JSON API client for the admin endpoints.

pub mod components;
pub mod dnd;
pub mod hover;
pub mod net;
pub mod state;
