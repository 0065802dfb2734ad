//! Reusable view components.

pub mod incidents_table;
