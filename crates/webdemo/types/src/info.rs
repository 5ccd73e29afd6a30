//! Response records for the informational endpoints

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plain text message, used by the echo endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMessage {
    pub data: String,
}

impl DataMessage {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Build metadata of the running binary
///
/// All fields are empty strings when build metadata is not exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub timestamp: String,
    pub version: String,
    pub name: String,
    pub artifact: String,
    pub group: String,
    pub git_full_hash: String,
    pub git_branch_name: String,
}

/// Identity and liveness of the running service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub id: String,
    pub name: String,
    pub version: String,
    /// Current time, epoch milliseconds
    pub timestamp: i64,
    /// Milliseconds since the service started
    pub uptime: i64,
}

/// Introspection of an incoming HTTP request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    pub id: String,
    pub request_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_encoding: Option<String>,
    pub method: String,
    pub cookies: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub headers: BTreeMap<String, Vec<String>>,
    pub protocol: String,
    pub remote_info: String,
}

/// Wrapper around a 64-bit number that does not fit in an IEEE double
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberWrapper {
    pub number: i64,
}
