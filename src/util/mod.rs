//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, downloads, charting,
//! timers) from page and component logic.

pub mod chart;
pub mod download;
pub mod format;
pub mod notify;
pub mod theme;
