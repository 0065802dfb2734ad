//! Small browser-facing helpers.

pub mod time;
