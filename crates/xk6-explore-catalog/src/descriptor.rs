// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire model of the registry's `catalog.json`.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use xk6_explore_core::{ExtensionFacets, ExtensionTier, ExtensionType};

/// The registry catalog, keyed by registry-chosen names.
///
/// The keys are not authoritative; [`PluginDescriptor::module`] identifies an
/// extension.
pub type Catalog = HashMap<String, PluginDescriptor>;

/// One extension record from the registry.
///
/// Empty optional fields are omitted when serialized. Unknown fields in the
/// registry response are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Go module path of the extension.
    pub module: String,
    /// `official`, `community`, or anything the registry sends.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub tier: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Highest entry of `versions`; recomputed after every fetch.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub latest: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,
    /// JavaScript module import paths.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    /// Output type names.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    /// Subcommand names.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub subcommands: Vec<String>,
    /// Source repository, when the registry provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<Repository>,
}

/// Repository metadata attached to a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl PluginDescriptor {
    /// Display classification (javascript > output > subcommand).
    pub fn extension_type(&self) -> ExtensionType {
        ExtensionType::of(self)
    }

    /// Display tier; unknown or missing tiers show as community.
    pub fn extension_tier(&self) -> ExtensionTier {
        ExtensionTier::of(self)
    }

    /// Repository URL, or an empty string.
    pub fn repo_url(&self) -> &str {
        self.repo.as_ref().map(|r| r.url.as_str()).unwrap_or_default()
    }
}

impl ExtensionFacets for PluginDescriptor {
    fn tier(&self) -> &str {
        &self.tier
    }

    fn imports(&self) -> &[String] {
        &self.imports
    }

    fn outputs(&self) -> &[String] {
        &self.outputs
    }

    fn subcommands(&self) -> &[String] {
        &self.subcommands
    }
}

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
