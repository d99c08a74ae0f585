// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The diff-to-change-event reducer
//!
//! Scans unified diff text for list entry lines, tallies additions against
//! removals per entry name, and emits one [`ChangeEvent`] per surviving
//! match. Matches whose name nets to zero within the diff are positional
//! churn (an entry moved) and are suppressed.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::event::{ChangeEvent, ChangeKind};

/// The versioned entry pattern, the wire format of the tracked list
///
/// A changed entry line in a unified diff looks like:
///
/// ```text
/// +- [Tofu](https://example.com/tofu) - Soy protein
/// ```
///
/// That is: the diff sign at the start of the line, optional indentation,
/// the markdown list marker `- `, a bracketed label, a parenthesized URL,
/// a literal ` - ` separator, then free text to end of line. Anything else
/// (different list punctuation, multi-line descriptions) is silently
/// unmatched. If the list's formatting conventions ever change, this
/// pattern is what must evolve, not the reduction algorithm.
pub const ENTRY_PATTERN: &str = r"(?m)^([+-])[ \t]*- \[([^\]]+)\]\(([^)]+)\) - ([^\n]+)";

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ENTRY_PATTERN).expect("entry pattern compiles"));

/// One pattern occurrence in document order, before net-change filtering
struct RawMatch<'a> {
    sign: char,
    name: &'a str,
    url: &'a str,
    description: &'a str,
}

/// Reduce one unified diff to the semantic changes it contains
///
/// Pure and total: any input string is valid, and input with no matching
/// lines (including the empty string) yields an empty vector. `revision` is
/// opaque metadata cloned onto every emitted event.
///
/// Cancellation keys on the entry *name* only, not on the full
/// `(name, url, description)` tuple. A commit that edits an entry's
/// description or URL while also reordering it can therefore cancel to
/// nothing and go unreported. That matches the long-standing behavior of
/// the feed and is pinned by tests; change it deliberately or not at all.
pub fn extract<M: Clone>(diff_text: &str, revision: M) -> Vec<ChangeEvent<M>> {
    let matches: Vec<RawMatch<'_>> = ENTRY_RE
        .captures_iter(diff_text)
        .map(|caps| RawMatch {
            // capture 1 is a single [+-] character
            sign: caps.get(1).map_or('+', |m| m.as_str().chars().next().unwrap_or('+')),
            name: caps.get(2).map_or("", |m| m.as_str()),
            url: caps.get(3).map_or("", |m| m.as_str()),
            description: caps.get(4).map_or("", |m| m.as_str()),
        })
        .collect();

    // First pass: net each name's additions against its removals.
    let mut tally: HashMap<&str, i64> = HashMap::new();
    for m in &matches {
        let delta = if m.sign == '-' { -1 } else { 1 };
        *tally.entry(m.name).or_insert(0) += delta;
    }

    trace!(matches = matches.len(), names = tally.len(), "per-diff tally built");

    // Second pass, in document order: names that netted to zero only moved.
    matches
        .iter()
        .filter(|m| tally.get(m.name).copied().unwrap_or(0) != 0)
        .map(|m| ChangeEvent {
            kind: if m.sign == '-' {
                ChangeKind::Removal
            } else {
                ChangeKind::Addition
            },
            name: m.name.to_string(),
            url: m.url.to_string(),
            description: m.description.to_string(),
            revision: revision.clone(),
        })
        .collect()
}
