// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for listfeed-feed

use thiserror::Error;

/// Errors that can occur during feed serialization and output
#[derive(Debug, Error)]
pub enum FeedError {
    /// Error serializing the Atom document
    #[error("Atom serialization error: {0}")]
    Atom(#[from] atom_syndication::Error),

    /// Error serializing the RSS document
    #[error("RSS serialization error: {0}")]
    Rss(#[from] rss::Error),

    /// Error serializing the JSON Feed document
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing a feed file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
