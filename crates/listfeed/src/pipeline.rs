// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The driver pipeline
//!
//! Glues the three library crates together: walk the tracked file's history
//! oldest-to-newest, reduce each adjacent-pair diff to change events, and
//! write the accumulated feed in all three output formats. Any failure is
//! fatal; this is a batch tool with no partial output.

use anyhow::Context;
use tracing::{debug, info};

use listfeed_extract::extract;
use listfeed_feed::{ATOM_FILE, Feed, FeedItem, JSON_FILE, RSS_FILE, write_atomic};
use listfeed_git::{GitRepo, HistoryOptions, Revision};

use crate::config::Config;

/// Mine the tracked file's history and write the three feed files
///
/// # Errors
///
/// Fails fast on an invalid configuration, an unopenable repository, a
/// tracked path with no history, an uncomputable diff, or a feed file that
/// cannot be serialized or written.
pub fn run(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    let repo = GitRepo::open(&config.workdir).with_context(|| {
        format!("failed to open repository: {}", config.workdir.display())
    })?;

    let options = HistoryOptions::for_path(config.file.clone());
    let revisions = repo.file_history(&options).with_context(|| {
        format!("failed to walk history of {}", config.file.display())
    })?;

    let feed = accumulate(&repo, &revisions, config)?;

    let atom = feed.to_atom(config.stylesheet.as_deref())?;
    write_atomic(config.destdir.join(ATOM_FILE), &atom)
        .with_context(|| format!("failed to write {ATOM_FILE}"))?;

    let json = feed.to_json()?;
    write_atomic(config.destdir.join(JSON_FILE), &json)
        .with_context(|| format!("failed to write {JSON_FILE}"))?;

    let rss = feed.to_rss()?;
    write_atomic(config.destdir.join(RSS_FILE), &rss)
        .with_context(|| format!("failed to write {RSS_FILE}"))?;

    info!(
        destdir = %config.destdir.display(),
        revisions = revisions.len(),
        items = feed.items.len(),
        "wrote {ATOM_FILE}, {JSON_FILE}, {RSS_FILE}"
    );

    Ok(())
}

/// Collect change events across all adjacent revision pairs into one feed
///
/// Events are stamped with the newer revision of each pair: that is the
/// commit that introduced the change. The oldest revision only ever serves
/// as the older side of the first pair, so content present from the start
/// produces no items.
fn accumulate(
    repo: &GitRepo,
    revisions: &[Revision],
    config: &Config,
) -> anyhow::Result<Feed> {
    let mut feed = Feed::new(
        config.title.clone(),
        config.link.clone(),
        config.description.clone(),
    );
    feed.created = revisions.first().map(|revision| revision.timestamp);

    for pair in revisions.windows(2) {
        let (older, newer) = (&pair[0], &pair[1]);

        debug!(
            sha = newer.short_sha(),
            author = %newer.author,
            summary = %newer.summary,
            "processing commit pair"
        );

        let diff = repo
            .diff_between(older, newer, &config.file)
            .with_context(|| {
                format!(
                    "failed to diff {} between {} and {}",
                    config.file.display(),
                    older.short_sha(),
                    newer.short_sha()
                )
            })?;

        for event in extract(&diff, newer.clone()) {
            debug!(kind = %event.kind, name = %event.name, url = %event.url, "change event");

            feed.push_item(FeedItem {
                title: event.title(),
                link: event.url,
                description: event.description,
                author: event.revision.author.clone(),
                published: event.revision.timestamp,
            });
        }
    }

    Ok(feed)
}
