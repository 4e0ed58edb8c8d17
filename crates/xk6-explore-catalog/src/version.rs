// SPDX-FileCopyrightText: 2026 xk6-explore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Latest-version resolution over registry version tags.

use std::cmp::Ordering;

use semver::Version;

/// Returns the highest tag in `versions`, as originally written.
///
/// The first tag seeds the search. If it does not parse, the result is empty
/// even when later tags are valid; malformed tags after the first are skipped.
/// Build metadata does not affect ordering, so among equal-precedence tags the
/// earliest one wins.
pub fn resolve_latest<S: AsRef<str>>(versions: &[S]) -> String {
    let Some((first, rest)) = versions.split_first() else {
        return String::new();
    };

    let Some(mut latest) = parse_tag(first.as_ref()) else {
        return String::new();
    };
    let mut latest_tag = first.as_ref();

    for tag in rest {
        let tag = tag.as_ref();
        let Some(version) = parse_tag(tag) else {
            continue;
        };

        if version.cmp_precedence(&latest) == Ordering::Greater {
            latest = version;
            latest_tag = tag;
        }
    }

    latest_tag.to_string()
}

/// Parse a registry tag such as `v1.2.3`, `1.2`, or `v0.5.0-beta.1`.
///
/// A leading lowercase `v` is accepted and a numeric core with one or two
/// components is completed with zeros.
fn parse_tag(tag: &str) -> Option<Version> {
    let bare = tag.strip_prefix('v').unwrap_or(tag);

    if let Ok(version) = Version::parse(bare) {
        return Some(version);
    }

    let core_end = bare.find(['-', '+']).unwrap_or(bare.len());
    let (core, suffix) = bare.split_at(core_end);
    let components = core.split('.').count();
    if core.is_empty() || components >= 3 {
        return None;
    }

    let padded = format!("{core}{}{suffix}", ".0".repeat(3 - components));
    Version::parse(&padded).ok()
}
