// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filtering and presentation order for catalog entries.

use std::cmp::Ordering;

use tracing::debug;
use xk6_explore_core::{KindFilter, TierFilter};

use crate::descriptor::{Catalog, PluginDescriptor};

/// Module path of k6 itself, which the registry lists alongside extensions.
pub const HOST_MODULE: &str = "go.k6.io/k6";

/// Returns the extensions passing both filters, in arbitrary order.
///
/// A `None` filter accepts everything. The k6 entry is always excluded.
pub fn filter_extensions(
    catalog: &Catalog,
    kind: Option<KindFilter>,
    tier: Option<TierFilter>,
) -> Vec<&PluginDescriptor> {
    catalog
        .values()
        .filter(|ext| ext.module != HOST_MODULE)
        .filter(|ext| kind.is_none_or(|k| k.matches(*ext)))
        .filter(|ext| tier.is_none_or(|t| t.matches(*ext)))
        .collect()
}

/// Sorts official before community, then by type, then by module path.
pub fn sort_extensions(extensions: &mut [&PluginDescriptor]) {
    extensions.sort_by(|a, b| presentation_order(a, b));
}

/// Filters then sorts: the list the command renders.
pub fn select_extensions(
    catalog: &Catalog,
    kind: Option<KindFilter>,
    tier: Option<TierFilter>,
) -> Vec<&PluginDescriptor> {
    let mut extensions = filter_extensions(catalog, kind, tier);
    sort_extensions(&mut extensions);

    debug!(
        total = catalog.len(),
        selected = extensions.len(),
        kind = ?kind,
        tier = ?tier,
        "extensions selected"
    );

    extensions
}

fn presentation_order(a: &PluginDescriptor, b: &PluginDescriptor) -> Ordering {
    a.extension_tier()
        .cmp(&b.extension_tier())
        .then_with(|| a.extension_type().cmp(&b.extension_type()))
        .then_with(|| a.module.cmp(&b.module))
        // Only reached for duplicate module paths; keeps the order total.
        .then_with(|| a.tier.cmp(&b.tier))
        .then_with(|| a.latest.cmp(&b.latest))
}
