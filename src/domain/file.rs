use std::cmp::Reverse;

use crate::error::{AppError, AppResult};

/// Git file status as reported in commit detail, see
/// <https://git-scm.com/docs/git-status#_output>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileStatus {
    Modified,
    Added,
    Removed,
    Renamed,
    Changed,
    Copied,
    Unchanged,
}

/// Most interesting status first.
pub const STATUS_PRIORITY: [FileStatus; 7] = [
    FileStatus::Modified,
    FileStatus::Added,
    FileStatus::Removed,
    FileStatus::Renamed,
    FileStatus::Changed,
    FileStatus::Copied,
    FileStatus::Unchanged,
];

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Modified => "modified",
            FileStatus::Added => "added",
            FileStatus::Removed => "removed",
            FileStatus::Renamed => "renamed",
            FileStatus::Changed => "changed",
            FileStatus::Copied => "copied",
            FileStatus::Unchanged => "unchanged",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        STATUS_PRIORITY
            .into_iter()
            .find(|status| status.as_str() == value)
    }

    /// Position in [`STATUS_PRIORITY`]; lower sorts first.
    pub fn priority(&self) -> usize {
        match self {
            FileStatus::Modified => 0,
            FileStatus::Added => 1,
            FileStatus::Removed => 2,
            FileStatus::Renamed => 3,
            FileStatus::Changed => 4,
            FileStatus::Copied => 5,
            FileStatus::Unchanged => 6,
        }
    }
}

/// One file touched by a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFileRecord {
    pub filename: String,
    /// Only set for renames.
    pub previous_filename: Option<String>,
    pub status: FileStatus,
    pub changes: u64,
}

impl ChangedFileRecord {
    /// Builds a record from the raw status string of external commit data,
    /// failing on any status outside the git vocabulary.
    pub fn parse(
        filename: String,
        previous_filename: Option<String>,
        status: &str,
        changes: u64,
    ) -> AppResult<Self> {
        let status = FileStatus::from_str(status).ok_or_else(|| AppError::UnknownFileStatus {
            status: status.to_string(),
            filename: filename.clone(),
        })?;
        Ok(Self {
            filename,
            previous_filename,
            status,
            changes,
        })
    }
}

/// Picks the file that best stands for the whole commit: highest status
/// priority, then most changed lines. Full ties keep input order.
pub fn resolve_representative(files: &[ChangedFileRecord]) -> Option<&ChangedFileRecord> {
    // min_by_key returns the first of several equal minima, which is the
    // same element a stable sort would put in front.
    files
        .iter()
        .min_by_key(|file| (file.status.priority(), Reverse(file.changes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, status: FileStatus, changes: u64) -> ChangedFileRecord {
        ChangedFileRecord {
            filename: name.to_string(),
            previous_filename: None,
            status,
            changes,
        }
    }

    #[test]
    fn priority_matches_declared_order() {
        for (position, status) in STATUS_PRIORITY.iter().enumerate() {
            assert_eq!(status.priority(), position);
            assert_eq!(FileStatus::from_str(status.as_str()), Some(*status));
        }
    }

    #[test]
    fn status_beats_change_count() {
        let files = vec![
            file("a", FileStatus::Unchanged, 5),
            file("b", FileStatus::Modified, 1),
            file("c", FileStatus::Added, 100),
        ];
        assert_eq!(resolve_representative(&files).map(|f| f.filename.as_str()), Some("b"));
    }

    #[test]
    fn change_count_breaks_ties() {
        let files = vec![
            file("small", FileStatus::Added, 3),
            file("large", FileStatus::Added, 10),
        ];
        assert_eq!(
            resolve_representative(&files).map(|f| f.filename.as_str()),
            Some("large")
        );
    }

    #[test]
    fn full_ties_keep_input_order() {
        let files = vec![
            file("first", FileStatus::Removed, 7),
            file("second", FileStatus::Removed, 7),
            file("third", FileStatus::Removed, 7),
        ];
        for _ in 0..10 {
            assert_eq!(
                resolve_representative(&files).map(|f| f.filename.as_str()),
                Some("first")
            );
        }
    }

    #[test]
    fn empty_list_has_no_representative() {
        assert!(resolve_representative(&[]).is_none());
    }

    #[test]
    fn rejects_unknown_status() {
        let err = ChangedFileRecord::parse("a.rs".to_string(), None, "vanished", 1).unwrap_err();
        assert!(matches!(
            &err,
            AppError::UnknownFileStatus { status, filename } if status == "vanished" && filename == "a.rs"
        ));
        assert_eq!(err.to_string(), "unknown file status 'vanished' for a.rs");
    }
}
