//! Revision metadata types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one revision of the tracked path
///
/// This is the opaque metadata stamped onto change events: the extractor
/// never looks inside it, the feed sink reads author and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Author timestamp
    pub timestamp: DateTime<Utc>,
    /// First line of the commit message
    pub summary: String,
}

impl Revision {
    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use similar_asserts::assert_eq;

    fn sample_revision() -> Revision {
        Revision {
            sha: "1945ab9c752534e733c38ba0109dc3b741f0a6eb".to_string(),
            author: "Test Author".to_string(),
            author_email: "test@example.com".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 17, 2, 33, 6).unwrap(),
            summary: "Add three new entries".to_string(),
        }
    }

    #[test]
    fn test_revision_serialization_roundtrip() {
        let revision = sample_revision();
        let json = serde_json::to_string(&revision).expect("serialize");
        let deserialized: Revision = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(revision, deserialized);
    }

    #[test]
    fn test_is_valid_sha_valid() {
        assert!(Revision::is_valid_sha(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eb"
        ));
        assert!(Revision::is_valid_sha(
            "ABCDEF1234567890abcdef1234567890abcdef12"
        ));
    }

    #[test]
    fn test_is_valid_sha_invalid() {
        // Too short
        assert!(!Revision::is_valid_sha("1945ab9"));
        // Invalid characters
        assert!(!Revision::is_valid_sha(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eg"
        ));
        // Empty
        assert!(!Revision::is_valid_sha(""));
    }

    #[test]
    fn test_short_sha() {
        assert_eq!(sample_revision().short_sha(), "1945ab9");
    }

    #[test]
    fn test_short_sha_handles_short_input() {
        let mut revision = sample_revision();
        revision.sha = "abc".to_string();
        assert_eq!(revision.short_sha(), "abc");
    }

    #[test]
    fn test_timestamp_iso8601_serialization() {
        let json = serde_json::to_string(&sample_revision()).expect("serialize");
        // chrono serializes to RFC 3339/ISO 8601 format
        assert!(json.contains("2026-01-17"));
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy to generate valid 40-character hex SHA strings
    fn sha_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[0-9a-f]{40}").expect("valid regex")
    }

    /// Strategy to generate arbitrary Revision values
    fn revision_strategy() -> impl Strategy<Value = Revision> {
        (
            sha_strategy(),
            "[A-Za-z ]{1,50}",        // author name
            "[a-z]+@[a-z]+\\.[a-z]+", // author email
            0i64..2_000_000_000i64,   // timestamp as unix seconds
            ".*",                     // summary
        )
            .prop_map(|(sha, author, author_email, ts, summary)| Revision {
                sha,
                author,
                author_email,
                timestamp: DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now),
                summary,
            })
    }

    proptest! {
        /// Property: any generated Revision has a valid SHA
        #[test]
        fn prop_revision_sha_is_valid(revision in revision_strategy()) {
            prop_assert!(Revision::is_valid_sha(&revision.sha));
        }

        /// Property: round-trip JSON serialization preserves all fields
        #[test]
        fn prop_revision_roundtrip_serialization(revision in revision_strategy()) {
            let json = serde_json::to_string(&revision).expect("serialize");
            let deserialized: Revision = serde_json::from_str(&json).expect("deserialize");
            prop_assert_eq!(revision, deserialized);
        }

        /// Property: short_sha returns between 1 and 7 characters
        #[test]
        fn prop_short_sha_length(revision in revision_strategy()) {
            let short = revision.short_sha();
            prop_assert!(!short.is_empty() && short.len() <= 7);
        }
    }
}
