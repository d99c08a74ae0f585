// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! RSS 2.0 serialization

use std::collections::BTreeMap;

use ::rss::extension::dublincore::DublinCoreExtension;
use ::rss::{ChannelBuilder, ItemBuilder};

use crate::error::FeedError;
use crate::model::Feed;
use crate::writer::with_xml_declaration;

const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

impl Feed {
    /// Serialize the feed as an RSS 2.0 document
    ///
    /// Item authors are carried as Dublin Core `dc:creator` elements:
    /// RSS reserves `<author>` for email addresses, and the feed only has
    /// author names.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Rss` if the document cannot be written.
    pub fn to_rss(&self) -> Result<String, FeedError> {
        let items = self
            .items
            .iter()
            .map(|item| {
                let mut dc = DublinCoreExtension::default();
                dc.set_creators(vec![item.author.clone()]);
                ItemBuilder::default()
                    .title(item.title.clone())
                    .link(item.link.clone())
                    .description(item.description.clone())
                    .pub_date(item.published.to_rfc2822())
                    .dublin_core_ext(dc)
                    .build()
            })
            .collect::<Vec<_>>();

        let mut namespaces = BTreeMap::new();
        namespaces.insert("dc".to_string(), DC_NAMESPACE.to_string());

        let channel = ChannelBuilder::default()
            .title(self.title.clone())
            .link(self.link.clone())
            .description(self.description.clone())
            .pub_date(self.created.map(|when| when.to_rfc2822()))
            .last_build_date(self.updated.map(|when| when.to_rfc2822()))
            .namespaces(namespaces)
            .items(items)
            .build();

        let buf = channel.write_to(Vec::new())?;
        Ok(with_xml_declaration(&String::from_utf8_lossy(&buf)))
    }
}
