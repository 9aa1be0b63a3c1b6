//! Auth module - session values, credential validation, and sign-in/out
//! commands.

mod auth_errors;
mod auth_model;
mod auth_service;

pub use auth_errors::AuthError;
pub use auth_model::*;
pub use auth_service::*;
