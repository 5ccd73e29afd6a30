//! API request handlers

mod data;
mod introspect;
mod user;

pub use data::*;
pub use introspect::*;
pub use user::*;
