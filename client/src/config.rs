//! UI configuration.
//!
//! The WASM bundle has no process environment at runtime, so `VIZAI_API_BASE`
//! is captured when the crate is compiled. The host reuses `normalize_api_base`
//! for its own runtime copy of the same variable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_VAR: &str = "VIZAI_API_BASE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the (not yet wired) backend API.
    pub api_base: Option<String>,
}

impl ClientConfig {
    /// Read the build-time environment.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("VIZAI_API_BASE"))
    }

    pub fn from_raw(api_base: Option<&str>) -> Self {
        Self { api_base: normalize_api_base(api_base) }
    }
}

/// Trim, drop trailing slashes, and treat blank values as unset.
pub fn normalize_api_base(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim().trim_end_matches('/');
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
