//! HTTP API handlers for wellness-api

pub mod analyze;
pub mod buildinfo;
pub mod health;

pub use analyze::{analyze, ApiError};
pub use buildinfo::get_build_info;
pub use health::{health_check, root_status, status_routes};
