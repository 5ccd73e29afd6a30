//! Build metadata captured at compile time by `build.rs`

use chrono::DateTime;
use webdemo_types::BuildInfo;

const BUILD_GROUP: &str = "webdemo";

/// Build properties of the running binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildProperties {
    /// Build time, RFC 3339
    pub time: String,
    pub version: String,
    pub name: String,
    pub artifact: String,
    pub group: String,
    pub git_full_hash: Option<String>,
    pub git_branch_name: Option<String>,
}

impl BuildProperties {
    /// Properties embedded into this binary
    pub fn current() -> Self {
        let time = env!("WEBDEMO_BUILD_EPOCH")
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|time| time.to_rfc3339())
            .unwrap_or_default();

        Self {
            time,
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: env!("CARGO_PKG_NAME").to_string(),
            artifact: env!("CARGO_PKG_NAME").to_string(),
            group: BUILD_GROUP.to_string(),
            git_full_hash: option_env!("WEBDEMO_GIT_FULL_HASH").map(str::to_string),
            git_branch_name: option_env!("WEBDEMO_GIT_BRANCH").map(str::to_string),
        }
    }

    pub fn to_info(&self) -> BuildInfo {
        BuildInfo {
            timestamp: self.time.clone(),
            version: self.version.clone(),
            name: self.name.clone(),
            artifact: self.artifact.clone(),
            group: self.group.clone(),
            git_full_hash: self.git_full_hash.clone().unwrap_or_default(),
            git_branch_name: self.git_branch_name.clone().unwrap_or_default(),
        }
    }
}
