// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! listfeed-git: Git history access for listfeed
//!
//! This library crate walks the commit history of one tracked path and
//! renders unified diff text between adjacent revisions, using the `git2`
//! crate.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use listfeed_git::{GitRepo, HistoryOptions};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let revisions = repo
//!     .file_history(&HistoryOptions::for_path("README.md"))
//!     .expect("walk history");
//!
//! for pair in revisions.windows(2) {
//!     let diff = repo.diff_between(&pair[0], &pair[1], "README.md").expect("diff");
//!     println!("{} -> {}: {} bytes", pair[0].short_sha(), pair[1].short_sha(), diff.len());
//! }
//! ```

pub mod error;
pub mod history;
pub mod revision;

pub use error::GitError;
pub use history::{GitRepo, HistoryOptions};
pub use revision::Revision;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::history::{GitRepo, HistoryOptions};
    pub use crate::revision::Revision;
}
