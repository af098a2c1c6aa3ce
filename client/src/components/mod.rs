//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome while reading/writing shared state
//! from Leptos context providers.

pub mod dashboard_layout;
pub mod protected_route;
pub mod sidebar;
pub mod stat_card;
pub mod user_menu;
