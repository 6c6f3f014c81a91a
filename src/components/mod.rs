//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and problem widgets while reading and
//! writing shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod problem_card;
pub mod problem_detail_dialog;
pub mod problem_grid;
pub mod status_bar;
pub mod tab_bar;
pub mod theme_toggle;
pub mod toast_stack;
