//! Data Transfer Objects for REST request/response serialization.

pub mod common_dto;
pub mod repo_dto;
pub mod trigger_dto;

pub use common_dto::*;
pub use repo_dto::*;
pub use trigger_dto::*;
