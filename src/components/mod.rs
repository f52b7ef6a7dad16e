//! UI Components
//!
//! Leptos components mounted alongside the server-rendered page.

mod confirm_dialog;

pub use confirm_dialog::Confirmer;
