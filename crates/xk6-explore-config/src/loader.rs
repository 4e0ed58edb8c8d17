// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./explore.toml` > `~/.config/xk6-explore/explore.toml`,
//! with environment variable overrides via the `XK6_EXPLORE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ExploreConfig;
use crate::CONFIG_FILE_NAME;

/// Path of the per-user configuration file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("xk6-explore").join(CONFIG_FILE_NAME))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `~/.config/xk6-explore/explore.toml`
/// 3. `./explore.toml`
/// 4. `XK6_EXPLORE_*` environment variables
pub fn load_config() -> Result<ExploreConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ExploreConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ExploreConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ExploreConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ExploreConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ExploreConfig::default()))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE_NAME))
        .merge(env_provider())
}

/// Environment provider with an explicit section mapping.
///
/// `XK6_EXPLORE_CATALOG_URL` maps to `catalog.url`, `XK6_EXPLORE_LOG_LEVEL`
/// to `log.level`, and `XK6_EXPLORE_OUTPUT_PLAIN` to `output.plain`.
fn env_provider() -> Env {
    Env::prefixed("XK6_EXPLORE_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a lowercased, prefix-stripped env var name onto a dotted config path.
pub(crate) fn map_env_key(key: &str) -> String {
    key.replacen("catalog_", "catalog.", 1)
        .replacen("log_", "log.", 1)
        .replacen("output_", "output.", 1)
}
