// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension catalog retrieval and selection.
//!
//! The registry publishes a JSON object of extension descriptors. This crate
//! fetches it ([`fetch`]), derives each descriptor's latest version
//! ([`version`]), and narrows and orders the result for display ([`filter`]).

pub mod descriptor;
pub mod fetch;
pub mod filter;
pub mod version;

pub use descriptor::{Catalog, PluginDescriptor, Repository};
pub use fetch::{
    fetch_catalog, fetch_default_catalog, CatalogClient, DEFAULT_CATALOG_URL,
    HTTP_REQUEST_TIMEOUT, USER_AGENT,
};
pub use filter::{filter_extensions, select_extensions, sort_extensions, HOST_MODULE};
pub use version::resolve_latest;
