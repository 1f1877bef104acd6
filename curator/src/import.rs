//! Normalizes a third-party follower export into store records.
//!
//! The export wraps each follower in a one-element `string_list_data` list
//! whose entry carries the username under `value` and the profile URL under
//! `href`. The parser owns that schema end to end; the rest of the crate
//! only sees [`ProfileHandle`] and [`FollowerRecord`].

use serde::Deserialize;

use crate::{error::AppError, model::FollowerRecord};

#[derive(Debug, Deserialize)]
struct ExportEntry {
    string_list_data: Vec<ExportTarget>,
}

#[derive(Debug, Deserialize)]
struct ExportTarget {
    #[serde(default)]
    value: String,
    href: Option<String>,
}

/// Username and profile URL extracted from one export entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileHandle {
    pub username: String,
    pub href: Option<String>,
}

/// Parses a raw export document. Any structural mismatch, including an entry
/// without its nested handle list, comes back as a single validation error
/// rather than a panic deep in a handler.
pub fn parse_export(raw: &[u8]) -> Result<Vec<ProfileHandle>, AppError> {
    let entries: Vec<ExportEntry> =
        serde_json::from_slice(raw).map_err(|e| AppError::MalformedExport(e.to_string()))?;

    let mut handles = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let Some(target) = entry.string_list_data.into_iter().next() else {
            return Err(AppError::MalformedExport(format!(
                "entry {index} has an empty string_list_data list"
            )));
        };

        handles.push(ProfileHandle {
            username: target.value,
            href: target.href,
        });
    }

    Ok(handles)
}

/// Appends handles that are not yet in the store. Empty usernames and
/// already-known usernames are skipped silently, so re-importing the same
/// export is idempotent. Returns how many records were added.
pub fn merge_handles(records: &mut Vec<FollowerRecord>, handles: Vec<ProfileHandle>) -> usize {
    let mut added = 0;

    for handle in handles {
        if handle.username.is_empty() {
            continue;
        }

        if records
            .iter()
            .any(|record| record.username == handle.username)
        {
            continue;
        }

        records.push(FollowerRecord::new(handle.username, handle.href));
        added += 1;
    }

    added
}
