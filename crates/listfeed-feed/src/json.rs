// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JSON Feed serialization
//!
//! Emits JSON Feed 1.1 (<https://www.jsonfeed.org/version/1.1/>).

use serde::Serialize;

use crate::error::FeedError;
use crate::model::Feed;
use crate::JSON_FILE;

const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1.1";

#[derive(Debug, Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    feed_url: String,
    description: &'a str,
    items: Vec<JsonItem<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonItem<'a> {
    id: &'a str,
    url: &'a str,
    title: &'a str,
    content_text: &'a str,
    date_published: String,
    authors: Vec<JsonAuthor<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonAuthor<'a> {
    name: &'a str,
}

impl Feed {
    /// Serialize the feed as a JSON Feed 1.1 document
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, FeedError> {
        let items = self
            .items
            .iter()
            .map(|item| JsonItem {
                id: &item.link,
                url: &item.link,
                title: &item.title,
                content_text: &item.description,
                date_published: item.published.to_rfc3339(),
                authors: vec![JsonAuthor { name: &item.author }],
            })
            .collect();

        let doc = JsonFeed {
            version: JSON_FEED_VERSION,
            title: &self.title,
            home_page_url: &self.link,
            feed_url: self.link_to(JSON_FILE),
            description: &self.description,
            items,
        };

        Ok(serde_json::to_string_pretty(&doc)?)
    }
}
