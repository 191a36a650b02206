//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the protected shell chrome and the small building blocks
//! shared by feature pages. Session-aware components read the session gate
//! from Leptos context; the rest are driven entirely by props.

pub mod alert_banner;
pub mod confirm_modal;
pub mod loading;
pub mod sidebar;
pub mod stats_card;
pub mod top_navbar;
