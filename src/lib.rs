pub mod arguments;
pub mod cli;
pub mod error;
pub mod logging;

/// Version identifier embedded at build time; empty when unavailable.
pub fn version() -> &'static str {
    option_env!("CARGO_PKG_VERSION").unwrap_or("")
}
