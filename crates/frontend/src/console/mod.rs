//! Interactive console for the OzGroceries products API
//!
//! - [`api`]: HTTP client and browser transport
//! - [`state`]: request orchestrator (selection, form, lifecycle)
//! - [`ui`]: endpoint list, parameter form, response views

pub mod api;
pub mod state;
pub mod ui;
