use tracing::{debug, warn};

use crate::context::AppContext;
use crate::domain::event::{EventPayload, GitHubEvent, PushPayload};
use crate::domain::push::{PushedCommit, VerbRendering};
use crate::domain::template::render_event;
use crate::error::AppResult;

/// Status lines for every event in the feed that has one, newest first.
pub async fn describe_events(ctx: &AppContext) -> AppResult<Vec<String>> {
    let events = ctx.event_feed.recent_events().await?;
    let mut lines = Vec::with_capacity(events.len());
    for event in &events {
        if let Some(line) = describe_event(ctx, event).await? {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// The status line of the newest event that has one.
pub async fn latest_status(ctx: &AppContext) -> AppResult<Option<String>> {
    let events = ctx.event_feed.recent_events().await?;
    for event in &events {
        if let Some(line) = describe_event(ctx, event).await? {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

pub async fn describe_event(ctx: &AppContext, event: &GitHubEvent) -> AppResult<Option<String>> {
    let display = ctx.repo_names.display_name(&event.repo.name);
    let push_line = match &event.payload {
        EventPayload::Push(push) => Some(describe_push(ctx, push, &display).await?),
        _ => None,
    };

    let line = render_event(event, &display, push_line);
    if line.is_none() {
        match &event.payload {
            EventPayload::Unsupported(kind) => {
                warn!(id = %event.id, kind = %kind, "unsupported event type")
            }
            payload => {
                debug!(id = %event.id, kind = payload.type_name(), "event has no status line")
            }
        }
    }
    Ok(line)
}

async fn describe_push(ctx: &AppContext, push: &PushPayload, display: &str) -> AppResult<String> {
    let Some(commit) = push.commits.first() else {
        return Ok(format!("Last seen pushing to {display}"));
    };

    let files = ctx.commit_detail.changed_files(&commit.url).await?;
    debug!(
        commit = %commit.url,
        files = files.as_ref().map_or(0, Vec::len),
        "describing push"
    );

    let rendering = if ctx.config.participles {
        VerbRendering::Participle
    } else {
        VerbRendering::Bare
    };
    let pushed = PushedCommit {
        repo: display,
        message: &commit.message,
        files: files.as_deref(),
    };
    Ok(pushed.describe(rendering))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::config::{AppConfig, TruncateMode};
    use crate::domain::file::{ChangedFileRecord, FileStatus};
    use crate::error::AppError;
    use crate::services::{CommitDetailService, EventFeedService};

    struct StaticFeed(Vec<GitHubEvent>);

    #[async_trait]
    impl EventFeedService for StaticFeed {
        async fn recent_events(&self) -> AppResult<Vec<GitHubEvent>> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct StaticCommits(HashMap<String, Vec<ChangedFileRecord>>);

    #[async_trait]
    impl CommitDetailService for StaticCommits {
        async fn changed_files(
            &self,
            commit_url: &str,
        ) -> AppResult<Option<Vec<ChangedFileRecord>>> {
            Ok(self.0.get(commit_url).cloned())
        }
    }

    struct FailingCommits;

    #[async_trait]
    impl CommitDetailService for FailingCommits {
        async fn changed_files(&self, _: &str) -> AppResult<Option<Vec<ChangedFileRecord>>> {
            Err(AppError::UnknownFileStatus {
                status: "teleported".to_string(),
                filename: "x".to_string(),
            })
        }
    }

    fn push_event(repo: &str, message: &str, url: &str) -> GitHubEvent {
        let json = serde_json::json!({
            "id": "1",
            "type": "PushEvent",
            "repo": { "name": repo },
            "payload": { "commits": [ { "message": message, "url": url } ] }
        });
        serde_json::from_value(json).unwrap()
    }

    fn simple_event(kind: &str, repo: &str) -> GitHubEvent {
        let json = serde_json::json!({ "id": "2", "type": kind, "repo": { "name": repo }, "payload": {} });
        serde_json::from_value(json).unwrap()
    }

    fn context(
        events: Vec<GitHubEvent>,
        commits: Arc<dyn CommitDetailService>,
        participles: bool,
    ) -> AppContext {
        let mut config = AppConfig {
            participles,
            ..AppConfig::default()
        };
        config.repo_names.base_users = vec!["ninjack-dev".to_string()];
        config.repo_names.truncate = TruncateMode::BaseUser;
        AppContext::new(config, Arc::new(StaticFeed(events)), commits).unwrap()
    }

    #[tokio::test]
    async fn renamed_file_describes_push() {
        let url = "https://api.github.com/repos/ninjack-dev/site/commits/abc";
        let commits = StaticCommits(HashMap::from([(
            url.to_string(),
            vec![ChangedFileRecord {
                filename: "b.ts".to_string(),
                previous_filename: Some("a.ts".to_string()),
                status: FileStatus::Renamed,
                changes: 0,
            }],
        )]));
        let ctx = context(
            vec![push_event("ninjack-dev/site", "Move things", url)],
            Arc::new(commits),
            false,
        );

        let lines = describe_events(&ctx).await.unwrap();
        assert_eq!(lines, vec!["Last seen renaming a.ts to b.ts in site"]);
    }

    #[tokio::test]
    async fn push_without_detail_uses_commit_verb() {
        let ctx = context(
            vec![push_event(
                "octocat/parser",
                "Refactoring the parser module",
                "https://api.github.com/repos/octocat/parser/commits/def",
            )],
            Arc::new(StaticCommits::default()),
            false,
        );
        let lines = describe_events(&ctx).await.unwrap();
        assert_eq!(lines, vec!["Last seen refactor octocat/parser"]);
    }

    #[tokio::test]
    async fn participles_are_opt_in() {
        let ctx = context(
            vec![push_event("octocat/parser", "I fixed a bug", "u")],
            Arc::new(StaticCommits::default()),
            true,
        );
        let lines = describe_events(&ctx).await.unwrap();
        assert_eq!(lines, vec!["Last seen fixing octocat/parser"]);
    }

    #[tokio::test]
    async fn push_without_commits_is_still_described() {
        let json = serde_json::json!({
            "id": "1", "type": "PushEvent", "repo": { "name": "o/r" }, "payload": { "commits": [] }
        });
        let event: GitHubEvent = serde_json::from_value(json).unwrap();
        let ctx = context(vec![event], Arc::new(StaticCommits::default()), false);
        let lines = describe_events(&ctx).await.unwrap();
        assert_eq!(lines, vec!["Last seen pushing to o/r"]);
    }

    #[tokio::test]
    async fn skips_silent_events() {
        let ctx = context(
            vec![
                simple_event("GollumEvent", "o/wiki"),
                simple_event("WatchEvent", "ninjack-dev/tools"),
                simple_event("DiscussionEvent", "o/r"),
            ],
            Arc::new(StaticCommits::default()),
            false,
        );
        let lines = describe_events(&ctx).await.unwrap();
        assert_eq!(lines, vec!["Last seen watching tools"]);
        assert_eq!(
            latest_status(&ctx).await.unwrap().as_deref(),
            Some("Last seen watching tools")
        );
    }

    #[tokio::test]
    async fn latest_status_is_none_for_silent_feed() {
        let ctx = context(
            vec![simple_event("PullRequestEvent", "o/r")],
            Arc::new(StaticCommits::default()),
            false,
        );
        assert!(latest_status(&ctx).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn commit_detail_errors_propagate() {
        let ctx = context(
            vec![push_event("o/r", "Fix", "u")],
            Arc::new(FailingCommits),
            false,
        );
        let err = describe_events(&ctx).await.unwrap_err();
        assert!(matches!(err, AppError::UnknownFileStatus { .. }));
    }
}
