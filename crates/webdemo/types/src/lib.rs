//! webdemo Types - Wire types for the demo web service
//!
//! Every value here is a plain, immutable record that is built per request
//! and serialized as JSON with camelCase field names.
//!
//! ## Key Concepts
//!
//! - **GenericRequest / GenericResponse**: named envelopes around a payload
//! - **Payload**: closed set of payload variants, discriminated by `kind`
//! - **Info records**: build, system and request introspection responses
//! - **User**: the model rendered by the user page

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod generic;
pub mod info;
pub mod user;

pub use generic::{
    ComplexDataPayload, GenericRequest, GenericResponse, Payload, PayloadKind, SimpleDataPayload,
    UnknownPayloadKind,
};
pub use info::{BuildInfo, DataMessage, NumberWrapper, RequestInfo, SystemInfo};
pub use user::User;
