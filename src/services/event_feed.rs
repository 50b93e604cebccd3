use async_trait::async_trait;

use crate::domain::event::GitHubEvent;
use crate::error::AppResult;

#[async_trait]
pub trait EventFeedService: Send + Sync {
    /// Events newest first, as the API lists them.
    async fn recent_events(&self) -> AppResult<Vec<GitHubEvent>>;
}
