// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! listfeed-feed: Syndication feed output for listfeed
//!
//! This library crate serializes an accumulated change feed to Atom, RSS 2.0
//! and JSON Feed documents, and writes them to disk atomically.
//!
//! # Example
//!
//! ```
//! use listfeed_feed::{Feed, FeedItem};
//! use chrono::Utc;
//!
//! let mut feed = Feed::new("My List Feed", "https://example.com/", "Changes to my list");
//! feed.created = Some(Utc::now());
//! feed.push_item(FeedItem {
//!     title: "Addition of Tofu".to_string(),
//!     link: "https://example.com/tofu".to_string(),
//!     description: "Soy protein".to_string(),
//!     author: "Alice".to_string(),
//!     published: Utc::now(),
//! });
//!
//! let atom = feed.to_atom(None).expect("atom");
//! assert!(atom.contains("Addition of Tofu"));
//! ```

#![warn(missing_docs)]

pub mod atom;
pub mod error;
pub mod json;
pub mod model;
pub mod rss;
pub mod writer;

pub use error::FeedError;
pub use model::{Feed, FeedItem};
pub use writer::write_atomic;

/// Output file name for the Atom document
pub const ATOM_FILE: &str = "feed.xml";
/// Output file name for the JSON Feed document
pub const JSON_FILE: &str = "feed.json";
/// Output file name for the RSS 2.0 document
pub const RSS_FILE: &str = "feed.rss";

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::FeedError;
    pub use crate::model::{Feed, FeedItem};
    pub use crate::writer::write_atomic;
}
