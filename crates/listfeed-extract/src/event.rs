//! Change event types produced by the extractor

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an entry was added to or removed from the tracked list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// The entry appears in the newer revision but not the older one
    Addition,
    /// The entry appears in the older revision but not the newer one
    Removal,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Addition => write!(f, "Addition"),
            Self::Removal => write!(f, "Removal"),
        }
    }
}

/// One semantic change to the tracked list, ready for feed emission
///
/// `M` is opaque revision metadata (author, timestamp, ...) stamped onto the
/// event by the caller and passed through unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent<M> {
    /// Addition or removal
    pub kind: ChangeKind,
    /// The entry label, unique within the list
    pub name: String,
    /// The entry link target
    pub url: String,
    /// The entry free-text description
    pub description: String,
    /// Revision metadata supplied to `extract`, unmodified
    pub revision: M,
}

impl<M> ChangeEvent<M> {
    /// Feed item title for this event, e.g. `"Addition of Tofu"`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} of {}", self.kind, self.name)
    }
}
