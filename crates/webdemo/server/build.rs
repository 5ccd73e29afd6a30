//! Build script for `webdemo-server`.
//!
//! Captures build metadata as compile-time environment variables, read back
//! at runtime by `build_info::BuildProperties`:
//! - `WEBDEMO_BUILD_EPOCH`: build time, seconds since the Unix epoch
//! - `WEBDEMO_GIT_FULL_HASH`: full commit hash, if built from a git checkout
//! - `WEBDEMO_GIT_BRANCH`: current branch name, if built from a git checkout
//!
//! Git variables are simply not emitted when `git` is unavailable or the
//! sources are not inside a repository.

use std::path::Path;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    println!("cargo:rustc-env=WEBDEMO_BUILD_EPOCH={epoch}");

    if let Some(hash) = git(&["rev-parse", "HEAD"]) {
        println!("cargo:rustc-env=WEBDEMO_GIT_FULL_HASH={hash}");
    }
    if let Some(branch) = git(&["rev-parse", "--abbrev-ref", "HEAD"]) {
        println!("cargo:rustc-env=WEBDEMO_GIT_BRANCH={branch}");
    }

    // Re-run when HEAD moves so the hash does not go stale.
    if let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]) {
        let head = Path::new(&git_dir).join("HEAD");
        if head.exists() {
            println!("cargo:rerun-if-changed={}", head.display());
        }
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!value.is_empty()).then_some(value)
}
