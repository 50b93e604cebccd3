use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::repo_name::RepoNameFormatter;
use crate::error::AppResult;
use crate::services::{CommitDetailService, EventFeedService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub repo_names: RepoNameFormatter,
    pub event_feed: Arc<dyn EventFeedService>,
    pub commit_detail: Arc<dyn CommitDetailService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        event_feed: Arc<dyn EventFeedService>,
        commit_detail: Arc<dyn CommitDetailService>,
    ) -> AppResult<Self> {
        let repo_names = RepoNameFormatter::new(&config.repo_names)?;
        Ok(Self {
            config,
            repo_names,
            event_feed,
            commit_detail,
        })
    }
}
