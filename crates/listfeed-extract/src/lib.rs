// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! listfeed-extract: Diff-to-change-event reduction for listfeed
//!
//! This library crate reduces unified diff text for a curated markdown list
//! into semantic change events. A list entry that merely moved inside a
//! commit shows up in a line diff as a paired removal and addition of the
//! same entry; those pairs cancel out so only real additions and removals
//! surface.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use listfeed_extract::{extract, ChangeKind};
//!
//! let diff = "+- [Tofu](https://example.com/tofu) - Soy protein\n";
//! let events = extract(diff, "commit metadata");
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].kind, ChangeKind::Addition);
//! assert_eq!(events[0].name, "Tofu");
//! ```

pub mod event;
pub mod extractor;

pub use event::{ChangeEvent, ChangeKind};
pub use extractor::{ENTRY_PATTERN, extract};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::event::{ChangeEvent, ChangeKind};
    pub use crate::extractor::extract;
}
