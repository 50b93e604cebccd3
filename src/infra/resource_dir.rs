use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::event::GitHubEvent;
use crate::domain::file::ChangedFileRecord;
use crate::error::{AppError, AppResult};
use crate::services::{CommitDetailService, EventFeedService};

/// Saved API responses on disk: an events feed plus one JSON document per
/// commit, stored under the commit URL with its scheme removed.
pub struct ResourceDirectory {
    root: PathBuf,
    events_path: PathBuf,
}

impl ResourceDirectory {
    pub fn new(root: PathBuf, events_path: PathBuf) -> Self {
        Self { root, events_path }
    }

    fn commit_candidates(&self, commit_url: &str) -> AppResult<[PathBuf; 2]> {
        let relative = commit_url
            .split_once("://")
            .map_or(commit_url, |(_, rest)| rest)
            .trim_matches('/');
        let relative = Path::new(relative);
        let escapes = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_)));
        if relative.as_os_str().is_empty() || escapes {
            return Err(AppError::CommitDetail(format!(
                "commit url '{commit_url}' does not map into the resource directory"
            )));
        }

        let exact = self.root.join(relative);
        let mut with_extension = exact.clone().into_os_string();
        with_extension.push(".json");
        Ok([exact, PathBuf::from(with_extension)])
    }
}

async fn read_optional(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
            Ok(None)
        }
        Err(err) => Err(AppError::Io(err)),
    }
}

#[async_trait]
impl EventFeedService for ResourceDirectory {
    async fn recent_events(&self) -> AppResult<Vec<GitHubEvent>> {
        let path = &self.events_path;
        let contents = read_optional(path).await?.ok_or_else(|| {
            AppError::EventFeed(format!("events file not found: {}", path.display()))
        })?;
        let events: Vec<GitHubEvent> = serde_json::from_str(&contents).map_err(|err| {
            AppError::EventFeed(format!("invalid events file {}: {err}", path.display()))
        })?;
        debug!(count = events.len(), path = %path.display(), "loaded events");
        Ok(events)
    }
}

#[async_trait]
impl CommitDetailService for ResourceDirectory {
    async fn changed_files(&self, commit_url: &str) -> AppResult<Option<Vec<ChangedFileRecord>>> {
        for path in self.commit_candidates(commit_url)? {
            let Some(contents) = read_optional(&path).await? else {
                continue;
            };
            let response: CommitResponse = serde_json::from_str(&contents).map_err(|err| {
                AppError::CommitDetail(format!("invalid commit file {}: {err}", path.display()))
            })?;
            return response.into_records();
        }

        warn!(commit_url, "no saved commit detail");
        Ok(None)
    }
}

#[derive(Deserialize)]
struct CommitResponse {
    #[serde(default)]
    files: Option<Vec<CommitFileResponse>>,
}

#[derive(Deserialize)]
struct CommitFileResponse {
    filename: String,
    #[serde(default)]
    previous_filename: Option<String>,
    status: String,
    #[serde(default)]
    changes: u64,
}

impl CommitResponse {
    fn into_records(self) -> AppResult<Option<Vec<ChangedFileRecord>>> {
        self.files
            .map(|files| {
                files
                    .into_iter()
                    .map(|file| {
                        ChangedFileRecord::parse(
                            file.filename,
                            file.previous_filename,
                            &file.status,
                            file.changes,
                        )
                    })
                    .collect::<AppResult<Vec<_>>>()
            })
            .transpose()
    }
}
