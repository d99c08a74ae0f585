// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tracked-path history walking
//!
//! This module wraps the `git2` crate to produce, for one tracked path, an
//! oldest-to-newest list of revisions and the unified diff text between any
//! adjacent pair.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use git2::{DiffFormat, DiffOptions, Repository, Sort};
use tracing::debug;

use crate::error::GitError;
use crate::revision::Revision;

/// Configuration for walking the history of one tracked path
#[derive(Debug, Clone)]
pub struct HistoryOptions {
    /// The tracked path, relative to the repository root
    pub path: PathBuf,
    /// Start from this commit (defaults to HEAD)
    pub from_ref: Option<String>,
    /// Maximum number of revisions to retrieve
    pub limit: Option<usize>,
}

impl HistoryOptions {
    /// Create options for walking the full history of a tracked path
    #[must_use]
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            from_ref: None,
            limit: None,
        }
    }

    /// Set the starting reference
    #[must_use]
    pub fn from(mut self, reference: &str) -> Self {
        self.from_ref = Some(reference.to_string());
        self
    }

    /// Keep only the N most recent revisions
    #[must_use]
    pub fn latest(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }
}

/// A git repository wrapper for mining one tracked path
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Get the HEAD commit SHA
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be resolved.
    pub fn head_sha(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| GitError::InvalidReference {
            reference: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    /// Walk the history of the tracked path, oldest to newest
    ///
    /// Only commits that change the path's content relative to their first
    /// parent are included (root commits count when they introduce the
    /// path). The root revision's own content never produces a diff; diffs
    /// exist only between adjacent pairs of the returned list.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoHistory` when no commit in the walk touches the
    /// path, or `GitError` when the repository cannot be walked.
    pub fn file_history(&self, options: &HistoryOptions) -> Result<Vec<Revision>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;

        // Start from specified ref or HEAD
        if let Some(ref from_ref) = options.from_ref {
            let oid = self
                .repo
                .revparse_single(from_ref)
                .map_err(|_| GitError::InvalidReference {
                    reference: from_ref.clone(),
                })?
                .id();
            revwalk.push(oid)?;
        } else {
            revwalk.push_head()?;
        }

        let mut revisions = Vec::new();
        let limit = options.limit.unwrap_or(usize::MAX);

        for oid_result in revwalk {
            if revisions.len() >= limit {
                break;
            }

            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            if !self.touches_path(&commit, &options.path)? {
                continue;
            }

            revisions.push(extract_revision(&commit));
        }

        if revisions.is_empty() {
            return Err(GitError::NoHistory {
                path: options.path.display().to_string(),
            });
        }

        debug!(
            path = %options.path.display(),
            revisions = revisions.len(),
            "walked tracked path history"
        );

        // The walk yields newest first; callers consume oldest first.
        revisions.reverse();
        Ok(revisions)
    }

    /// Render the unified diff text for the tracked path between two revisions
    ///
    /// The diff is oriented older-to-newer: `+` lines are content present in
    /// `newer` but not `older`. Output is limited to the tracked path.
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` when either SHA cannot be
    /// resolved, or `GitError` when the diff cannot be computed.
    pub fn diff_between(
        &self,
        older: &Revision,
        newer: &Revision,
        path: impl AsRef<Path>,
    ) -> Result<String, GitError> {
        let older_tree = self.commit_tree(&older.sha)?;
        let newer_tree = self.commit_tree(&newer.sha)?;

        let mut opts = DiffOptions::new();
        opts.pathspec(path.as_ref());

        let diff = self.repo.diff_tree_to_tree(
            Some(&older_tree),
            Some(&newer_tree),
            Some(&mut opts),
        )?;

        let mut text = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            let content = std::str::from_utf8(line.content()).unwrap_or("");
            // Content lines carry their sign separately; headers do not.
            match line.origin() {
                '+' | '-' | ' ' => text.push(line.origin()),
                _ => {}
            }
            text.push_str(content);
            true
        })?;

        Ok(text)
    }

    /// Look up a commit's tree by SHA
    fn commit_tree(&self, sha: &str) -> Result<git2::Tree<'_>, GitError> {
        let oid = git2::Oid::from_str(sha).map_err(|_| GitError::InvalidReference {
            reference: sha.to_string(),
        })?;
        Ok(self.repo.find_commit(oid)?.tree()?)
    }

    /// Whether a commit changes the tracked path relative to its first parent
    fn touches_path(&self, commit: &git2::Commit<'_>, path: &Path) -> Result<bool, GitError> {
        let entry = tree_entry_id(&commit.tree()?, path);

        if commit.parent_count() == 0 {
            return Ok(entry.is_some());
        }

        let parent_entry = tree_entry_id(&commit.parent(0)?.tree()?, path);
        Ok(entry != parent_entry)
    }
}

/// The blob id of a path within a tree, if present
fn tree_entry_id(tree: &git2::Tree<'_>, path: &Path) -> Option<git2::Oid> {
    tree.get_path(path).ok().map(|entry| entry.id())
}

/// Extract revision metadata from a git2 commit
fn extract_revision(commit: &git2::Commit<'_>) -> Revision {
    let time = commit.time();
    let timestamp = Utc
        .timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    Revision {
        sha: commit.id().to_string(),
        author: commit.author().name().unwrap_or("Unknown").to_string(),
        author_email: commit.author().email().unwrap_or("").to_string(),
        timestamp,
        summary: commit.summary().unwrap_or("").to_string(),
    }
}

/// Convert an author timestamp from git seconds
#[must_use]
pub fn timestamp_from_seconds(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_open_nonexistent_repository() {
        let result = GitRepo::open("/nonexistent/path");
        assert!(result.is_err());
        match result {
            Err(GitError::RepositoryNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            _ => panic!("Expected RepositoryNotFound error"),
        }
    }

    #[test]
    fn test_history_options_builder() {
        let options = HistoryOptions::for_path("README.md").from("main").latest(10);
        assert_eq!(options.path, PathBuf::from("README.md"));
        assert_eq!(options.from_ref, Some("main".to_string()));
        assert_eq!(options.limit, Some(10));
    }

    #[test]
    fn test_history_options_defaults() {
        let options = HistoryOptions::for_path("README.md");
        assert!(options.from_ref.is_none());
        assert!(options.limit.is_none());
    }

    #[test]
    fn test_timestamp_from_seconds() {
        let ts = timestamp_from_seconds(0);
        assert_eq!(ts.timestamp(), 0);
    }
}
