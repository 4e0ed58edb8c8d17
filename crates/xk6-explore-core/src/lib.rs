// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for xk6-explore.
//!
//! This crate provides the error type, the closed filter enums accepted on
//! the command line, and the display classification used when rendering
//! catalog entries. The catalog crate implements [`ExtensionFacets`] for its
//! descriptor type so filters and classifiers stay independent of the wire
//! model.

pub mod error;
pub mod traits;
pub mod types;

/// Catalog endpoint used when neither configuration nor flags override it.
pub const DEFAULT_CATALOG_URL: &str = "https://registry.k6.io/catalog.json";

// Re-export key items at crate root for ergonomic imports.
pub use error::ExploreError;
pub use traits::ExtensionFacets;
pub use types::{ExtensionTier, ExtensionType, KindFilter, TierFilter};
