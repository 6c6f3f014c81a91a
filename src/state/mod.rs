//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is provided once from `App` as an `RwSignal` and read by
//! pages and components. State types stay free of browser APIs so their
//! transitions run under native tests.

pub mod catalog;
pub mod distribution;
pub mod loadable;
pub mod toast;
pub mod ui;
