//! Top-level views, one per session state.

pub mod dashboard;
pub mod login;
