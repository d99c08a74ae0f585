// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Atom serialization

use atom_syndication::{EntryBuilder, FeedBuilder, LinkBuilder, PersonBuilder, Text};
use chrono::{DateTime, FixedOffset, Utc};

use crate::error::FeedError;
use crate::model::Feed;
use crate::{ATOM_FILE, writer::with_xml_declaration};

fn fixed(when: DateTime<Utc>) -> DateTime<FixedOffset> {
    when.fixed_offset()
}

impl Feed {
    /// Serialize the feed as an Atom document
    ///
    /// The document carries a `rel="self"` link to the published `feed.xml`
    /// and a `rel="alternate"` link to the site. When `stylesheet` is given,
    /// an `<?xml-stylesheet?>` processing instruction is injected after the
    /// XML declaration so browsers render the feed through it.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Atom` if the document cannot be written.
    pub fn to_atom(&self, stylesheet: Option<&str>) -> Result<String, FeedError> {
        let entries = self
            .items
            .iter()
            .map(|item| {
                EntryBuilder::default()
                    .title(Text::plain(item.title.clone()))
                    .id(item.link.clone())
                    .updated(fixed(item.published))
                    .published(Some(fixed(item.published)))
                    .authors(vec![
                        PersonBuilder::default().name(item.author.clone()).build(),
                    ])
                    .links(vec![
                        LinkBuilder::default()
                            .href(item.link.clone())
                            .rel("alternate")
                            .build(),
                    ])
                    .summary(Some(Text::plain(item.description.clone())))
                    .build()
            })
            .collect::<Vec<_>>();

        // An Atom feed requires an updated element even when empty.
        let updated = self
            .updated
            .or(self.created)
            .map(fixed)
            .unwrap_or_else(|| fixed(DateTime::<Utc>::UNIX_EPOCH));

        let atom = FeedBuilder::default()
            .title(Text::plain(self.title.clone()))
            .id(self.link.clone())
            .subtitle(Some(Text::plain(self.description.clone())))
            .updated(updated)
            .links(vec![
                LinkBuilder::default()
                    .href(self.link_to(ATOM_FILE))
                    .rel("self")
                    .build(),
                LinkBuilder::default()
                    .href(self.link.clone())
                    .rel("alternate")
                    .build(),
            ])
            .entries(entries)
            .build();

        let buf = atom.write_to(Vec::new())?;
        let mut xml = with_xml_declaration(&String::from_utf8_lossy(&buf));

        if let Some(href) = stylesheet {
            xml = inject_stylesheet(&xml, href);
        }

        Ok(xml)
    }
}

/// Insert an xml-stylesheet processing instruction after the XML declaration
fn inject_stylesheet(xml: &str, href: &str) -> String {
    let pi = format!(r#"<?xml-stylesheet href="{href}" type="text/xsl"?>"#);
    match xml.find("?>") {
        Some(end) => format!("{}\n{}{}", &xml[..end + 2], pi, &xml[end + 2..]),
        None => format!("{pi}\n{xml}"),
    }
}
