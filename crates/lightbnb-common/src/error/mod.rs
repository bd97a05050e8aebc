//! Application error types

mod app_error;

pub use app_error::{domain_status, AppError, ErrorResponse};
