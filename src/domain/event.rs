//! Public activity events as returned by the GitHub events API.
//!
//! Only the fields the status templates read are modelled; everything else in
//! the payloads is ignored during deserialization.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct GitHubEvent {
    pub id: String,
    pub repo: Repo,
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// Full `owner/name`.
    pub name: String,
}

#[derive(Debug, Clone)]
pub enum EventPayload {
    CommitComment { comment: Link },
    Create,
    Delete,
    Fork { forkee: Forkee },
    Gollum,
    IssueComment { issue: IssueRef },
    Issues(IssuesPayload),
    Member { member: User },
    Public,
    PullRequest,
    PullRequestReview { pull_request: PullRequestRef },
    PullRequestReviewComment { comment: Link, pull_request: PullRequestRef },
    PullRequestReviewThread,
    Push(PushPayload),
    Release { release: Link },
    Sponsorship,
    Watch,
    /// An event type this crate does not know about yet.
    Unsupported(String),
}

impl EventPayload {
    pub fn type_name(&self) -> &str {
        match self {
            EventPayload::CommitComment { .. } => "CommitCommentEvent",
            EventPayload::Create => "CreateEvent",
            EventPayload::Delete => "DeleteEvent",
            EventPayload::Fork { .. } => "ForkEvent",
            EventPayload::Gollum => "GollumEvent",
            EventPayload::IssueComment { .. } => "IssueCommentEvent",
            EventPayload::Issues(_) => "IssuesEvent",
            EventPayload::Member { .. } => "MemberEvent",
            EventPayload::Public => "PublicEvent",
            EventPayload::PullRequest => "PullRequestEvent",
            EventPayload::PullRequestReview { .. } => "PullRequestReviewEvent",
            EventPayload::PullRequestReviewComment { .. } => "PullRequestReviewCommentEvent",
            EventPayload::PullRequestReviewThread => "PullRequestReviewThreadEvent",
            EventPayload::Push(_) => "PushEvent",
            EventPayload::Release { .. } => "ReleaseEvent",
            EventPayload::Sponsorship => "SponsorshipEvent",
            EventPayload::Watch => "WatchEvent",
            EventPayload::Unsupported(name) => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forkee {
    pub name: String,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    pub number: u64,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {
    pub id: u64,
    pub number: u64,
    pub html_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.login)
    }

    pub fn profile_url(&self) -> String {
        self.html_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}", self.login))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueAction {
    Opened,
    Edited,
    Closed,
    Reopened,
    Assigned,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssuesPayload {
    pub action: IssueAction,
    pub issue: IssueRef,
    #[serde(default)]
    pub assignee: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushCommit {
    pub message: String,
    /// API URL of the full commit, which carries the changed files.
    pub url: String,
}

#[derive(Deserialize)]
struct RawEvent {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    repo: Repo,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct CommentPayload {
    comment: Link,
}

#[derive(Deserialize)]
struct ForkPayload {
    forkee: Forkee,
}

#[derive(Deserialize)]
struct IssueCommentPayload {
    issue: IssueRef,
}

#[derive(Deserialize)]
struct MemberPayload {
    member: User,
}

#[derive(Deserialize)]
struct ReviewPayload {
    pull_request: PullRequestRef,
}

#[derive(Deserialize)]
struct ReviewCommentPayload {
    comment: Link,
    pull_request: PullRequestRef,
}

#[derive(Deserialize)]
struct ReleasePayload {
    release: Link,
}

fn parse_payload<T: DeserializeOwned>(kind: &str, value: Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|err| AppError::EventFeed(format!("invalid {kind} payload: {err}")))
}

impl TryFrom<RawEvent> for GitHubEvent {
    type Error = AppError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let RawEvent {
            id,
            kind,
            repo,
            payload: value,
        } = raw;

        let payload = match kind.as_str() {
            "CommitCommentEvent" => {
                let p: CommentPayload = parse_payload(&kind, value)?;
                EventPayload::CommitComment { comment: p.comment }
            }
            "CreateEvent" => EventPayload::Create,
            "DeleteEvent" => EventPayload::Delete,
            "ForkEvent" => {
                let p: ForkPayload = parse_payload(&kind, value)?;
                EventPayload::Fork { forkee: p.forkee }
            }
            "GollumEvent" => EventPayload::Gollum,
            "IssueCommentEvent" => {
                let p: IssueCommentPayload = parse_payload(&kind, value)?;
                EventPayload::IssueComment { issue: p.issue }
            }
            "IssuesEvent" => EventPayload::Issues(parse_payload(&kind, value)?),
            "MemberEvent" => {
                let p: MemberPayload = parse_payload(&kind, value)?;
                EventPayload::Member { member: p.member }
            }
            "PublicEvent" => EventPayload::Public,
            "PullRequestEvent" => EventPayload::PullRequest,
            "PullRequestReviewEvent" => {
                let p: ReviewPayload = parse_payload(&kind, value)?;
                EventPayload::PullRequestReview {
                    pull_request: p.pull_request,
                }
            }
            "PullRequestReviewCommentEvent" => {
                let p: ReviewCommentPayload = parse_payload(&kind, value)?;
                EventPayload::PullRequestReviewComment {
                    comment: p.comment,
                    pull_request: p.pull_request,
                }
            }
            "PullRequestReviewThreadEvent" => EventPayload::PullRequestReviewThread,
            "PushEvent" => EventPayload::Push(parse_payload(&kind, value)?),
            "ReleaseEvent" => {
                let p: ReleasePayload = parse_payload(&kind, value)?;
                EventPayload::Release { release: p.release }
            }
            "SponsorshipEvent" => EventPayload::Sponsorship,
            "WatchEvent" => EventPayload::Watch,
            _ => EventPayload::Unsupported(kind),
        };

        Ok(Self { id, repo, payload })
    }
}
