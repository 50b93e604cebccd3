use async_trait::async_trait;

use crate::domain::file::ChangedFileRecord;
use crate::error::AppResult;

#[async_trait]
pub trait CommitDetailService: Send + Sync {
    /// Files touched by the commit behind `commit_url`, or `None` when no
    /// detail is available for it.
    async fn changed_files(&self, commit_url: &str) -> AppResult<Option<Vec<ChangedFileRecord>>>;
}
