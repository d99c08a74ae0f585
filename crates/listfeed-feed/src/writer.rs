// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Atomic feed file output

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::FeedError;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Prepend an XML declaration when the serializer did not emit one
pub(crate) fn with_xml_declaration(xml: &str) -> String {
    if xml.starts_with("<?xml") {
        xml.to_string()
    } else {
        format!("{XML_DECLARATION}\n{xml}")
    }
}

/// Write `contents` to `path` atomically with mode 0644
///
/// The contents land in a temp file in the destination directory first and
/// are moved over the target in one rename, so a crashed run never leaves a
/// truncated feed behind.
///
/// # Errors
///
/// Returns `FeedError::Io` if the temp file cannot be created, written, or
/// persisted over the target.
pub fn write_atomic(path: impl AsRef<Path>, contents: &str) -> Result<(), FeedError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| FeedError::Io(e.error))?;

    // Temp files are created 0600; feeds are served publicly.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))?;
    }

    debug!(path = %path.display(), bytes = contents.len(), "feed file written");
    Ok(())
}
