//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `portfolio --version`.
pub fn version_line() -> String {
    format!("portfolio {} ({})", BUILD_DATE, BUILD_COMMIT)
}
