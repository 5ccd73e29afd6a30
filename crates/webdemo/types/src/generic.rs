//! Generic envelopes and the closed set of payload variants
//!
//! A generic request carries a `name` and a `data` payload. The payload is
//! discriminated by its `kind` field and is always exactly one of the
//! variants of [`Payload`]:
//!
//! ```json
//! { "name": "n1", "data": { "kind": "simple", "value": "x" } }
//! { "name": "n2", "data": { "kind": "complex", "items": [1, 2, 3] } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Incoming envelope: a name plus a payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericRequest<T> {
    pub name: String,
    pub data: T,
}

/// Outgoing envelope, same wire shape as [`GenericRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericResponse<T> {
    pub name: String,
    pub data: T,
}

impl<T> GenericResponse<T> {
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }
}

/// Payload with scalar fields only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleDataPayload {
    pub value: String,
}

/// Payload with aggregate fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexDataPayload {
    pub items: Vec<i64>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ComplexDataPayload {
    pub fn new(items: Vec<i64>) -> Self {
        Self {
            items,
            labels: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}

/// Closed set of payload variants
///
/// Adding a variant means adding a [`PayloadKind`] and a match arm wherever
/// payloads are dispatched; the compiler points at every such site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    Simple(SimpleDataPayload),
    Complex(ComplexDataPayload),
}

impl Payload {
    pub fn simple(value: impl Into<String>) -> Self {
        Payload::Simple(SimpleDataPayload {
            value: value.into(),
        })
    }

    pub fn complex(items: Vec<i64>) -> Self {
        Payload::Complex(ComplexDataPayload::new(items))
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Simple(_) => PayloadKind::Simple,
            Payload::Complex(_) => PayloadKind::Complex,
        }
    }
}

/// Discriminator values accepted in the `kind` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Simple,
    Complex,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 2] = [PayloadKind::Simple, PayloadKind::Complex];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Simple => "simple",
            PayloadKind::Complex => "complex",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `kind` value outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payload kind '{0}'")]
pub struct UnknownPayloadKind(pub String);

impl FromStr for PayloadKind {
    type Err = UnknownPayloadKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayloadKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownPayloadKind(s.to_string()))
    }
}
