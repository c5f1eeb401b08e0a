//! Configuration module for the ERGM configuration front end
//!
//! Limits are generated at compile time from the TOML profile selected by
//! `ERGM_BUILD_PROFILE`; user preferences are read from the environment at
//! runtime (see [`runtime`]).

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("ERGM_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("ERGM_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}
