//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns identity and theme and is the only writer of durable
//! storage; `theme` is the enum it persists. `listing` is the fetch lifecycle
//! every feature page shares.

pub mod listing;
pub mod session;
pub mod theme;
