// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only view of the catalog fields that filters and classifiers inspect.

/// Fields of an extension record used for filtering and classification.
///
/// Implemented by the catalog's descriptor type. Filters and display
/// classifiers only ever read through this trait.
pub trait ExtensionFacets {
    /// Raw tier string as received from the registry (may be empty).
    fn tier(&self) -> &str;

    /// JavaScript module import paths.
    fn imports(&self) -> &[String];

    /// Output type names.
    fn outputs(&self) -> &[String];

    /// Subcommand names.
    fn subcommands(&self) -> &[String];
}
