// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filter and classification types.
//!
//! Filtering and display disagree on unknown tiers: a tier
//! filter matches the exact string only, while [`ExtensionTier::of`] shows
//! anything that is not `official` as community.

use std::str::FromStr;

use strum::{Display, EnumString, VariantNames};

use crate::error::ExploreError;
use crate::traits::ExtensionFacets;

/// Value of the `--type` filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum KindFilter {
    JavaScript,
    Output,
    Subcommand,
}

impl KindFilter {
    /// Parse a filter value, rejecting anything outside the known literals.
    pub fn parse(value: &str) -> Result<Self, ExploreError> {
        Self::from_str(value).map_err(|_| ExploreError::InvalidKind {
            value: value.to_string(),
        })
    }

    /// True if the extension provides this kind, regardless of other facets.
    pub fn matches<E: ExtensionFacets + ?Sized>(self, ext: &E) -> bool {
        let facet = match self {
            KindFilter::JavaScript => ext.imports(),
            KindFilter::Output => ext.outputs(),
            KindFilter::Subcommand => ext.subcommands(),
        };
        !facet.is_empty()
    }
}

/// Value of the `--tier` filter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum TierFilter {
    Official,
    Community,
}

impl TierFilter {
    /// Parse a filter value, rejecting anything outside the known literals.
    pub fn parse(value: &str) -> Result<Self, ExploreError> {
        Self::from_str(value).map_err(|_| ExploreError::InvalidTier {
            value: value.to_string(),
        })
    }

    /// The exact wire string this filter accepts.
    pub fn as_str(self) -> &'static str {
        match self {
            TierFilter::Official => "official",
            TierFilter::Community => "community",
        }
    }

    /// Strict match: an empty or unrecognized tier never matches.
    pub fn matches<E: ExtensionFacets + ?Sized>(self, ext: &E) -> bool {
        ext.tier() == self.as_str()
    }
}

/// Display classification of an extension.
///
/// Variant order is the presentation order used when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtensionType {
    JavaScript,
    Output,
    Subcommand,
    Unknown,
}

impl ExtensionType {
    /// Classify with precedence javascript > output > subcommand.
    pub fn of<E: ExtensionFacets + ?Sized>(ext: &E) -> Self {
        if !ext.imports().is_empty() {
            ExtensionType::JavaScript
        } else if !ext.outputs().is_empty() {
            ExtensionType::Output
        } else if !ext.subcommands().is_empty() {
            ExtensionType::Subcommand
        } else {
            ExtensionType::Unknown
        }
    }

    /// Short form used in table columns.
    pub fn abbrev(self) -> &'static str {
        match self {
            ExtensionType::JavaScript => "js",
            ExtensionType::Output => "out",
            ExtensionType::Subcommand => "sub",
            ExtensionType::Unknown => "",
        }
    }
}

impl std::fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionType::JavaScript => write!(f, "JavaScript"),
            ExtensionType::Output => write!(f, "Output"),
            ExtensionType::Subcommand => write!(f, "Subcommand"),
            ExtensionType::Unknown => Ok(()),
        }
    }
}

/// Display classification of an extension's tier.
///
/// `Official` orders before `Community`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtensionTier {
    Official,
    Community,
}

impl ExtensionTier {
    /// Anything other than `official`, including an absent tier, is community.
    pub fn of<E: ExtensionFacets + ?Sized>(ext: &E) -> Self {
        match ext.tier() {
            "official" => ExtensionTier::Official,
            _ => ExtensionTier::Community,
        }
    }

    /// Short form used in table columns.
    pub fn abbrev(self) -> &'static str {
        match self {
            ExtensionTier::Official => "off",
            ExtensionTier::Community => "com",
        }
    }
}

impl std::fmt::Display for ExtensionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtensionTier::Official => write!(f, "Official"),
            ExtensionTier::Community => write!(f, "Community"),
        }
    }
}
