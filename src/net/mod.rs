//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `error` classifies failures, and `types`
//! defines the JSON schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;
