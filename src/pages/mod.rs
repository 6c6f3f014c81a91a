//! Page modules for the tabbed screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns tab-scoped orchestration and delegates rendering details
//! to `components`. Shared request flows live in `actions`.

pub mod actions;
pub mod distribution;
pub mod list;
pub mod search;
pub mod stats;
pub mod transfer;
