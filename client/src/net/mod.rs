//! Networking and identity modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps backend HTTP calls, `verifier` turns credentials into a
//! session, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
pub mod verifier;
