//! Embeds the commit hash and build date shown by `portfolio --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Short commit hash from `PORTFOLIO_COMMIT` (CI) or the local git checkout.
fn build_commit() -> String {
    if let Ok(commit) = env::var("PORTFOLIO_COMMIT") {
        return commit.chars().take(7).collect();
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn build_date() -> String {
    env::var("PORTFOLIO_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        build_commit(),
        build_date()
    );
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_COMMIT");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_BUILD_DATE");
}
