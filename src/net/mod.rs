//! Network layer: wire types and the HTTP collaborator.

pub mod api;
pub mod types;
