//! The accumulated feed model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ordered change feed accumulated over a tracked file's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// Feed title
    pub title: String,
    /// Link to the site the tracked file lives on
    pub link: String,
    /// Feed description
    pub description: String,
    /// Timestamp of the oldest mined revision
    pub created: Option<DateTime<Utc>>,
    /// Timestamp of the newest revision that produced an item
    pub updated: Option<DateTime<Utc>>,
    /// Items in chronological order, oldest first
    pub items: Vec<FeedItem>,
}

/// One change, ready for serialization in any output format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Item title, e.g. `"Addition of Tofu"`
    pub title: String,
    /// The changed entry's link target
    pub link: String,
    /// The changed entry's description text
    pub description: String,
    /// Author of the revision that produced the change
    pub author: String,
    /// Author timestamp of that revision
    pub published: DateTime<Utc>,
}

impl Feed {
    /// Create an empty feed with header metadata
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            created: None,
            updated: None,
            items: Vec::new(),
        }
    }

    /// Append an item and advance the feed's updated timestamp
    pub fn push_item(&mut self, item: FeedItem) {
        self.updated = Some(item.published);
        self.items.push(item);
    }

    /// Whether any changes were accumulated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The site link with a file name appended, for self links
    #[must_use]
    pub(crate) fn link_to(&self, file: &str) -> String {
        if self.link.ends_with('/') {
            format!("{}{file}", self.link)
        } else {
            format!("{}/{file}", self.link)
        }
    }
}
