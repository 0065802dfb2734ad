//! Plain client-side state models.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `incidents`) so the controller and
//! the view components can depend on small focused models.

pub mod incidents;
pub mod session;
