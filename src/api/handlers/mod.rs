//! Terminal handlers organized by resource.
//!
//! Each handler is an ordinary axum handler; [`crate::api::build_router`]
//! lifts it into a pipeline behind the request ID and logging stages.

pub mod repos;
pub mod system;
pub mod trigger;
