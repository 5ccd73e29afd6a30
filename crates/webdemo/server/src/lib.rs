//! webdemo server library
//!
//! This module provides the components of the demo web service:
//! - REST API handlers and router
//! - Payload reflection over the closed set of generic payload variants
//! - Build metadata captured at compile time
//! - Configuration and server lifecycle management

#![deny(unsafe_code)]

pub mod api;
pub mod build_info;
pub mod config;
pub mod error;
pub mod reflect;
pub mod server;
pub mod traffic;

pub use api::rest::state::{AppIdentity, AppState};
pub use build_info::BuildProperties;
pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult, ReflectError, ServerError, ServerResult};
pub use server::Server;
