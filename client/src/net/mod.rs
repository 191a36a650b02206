//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every REST call in an explicit `ApiResult`, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
