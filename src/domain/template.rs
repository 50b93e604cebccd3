//! Markdown status lines for every event type except pushes, whose line is
//! built from commit data by [`crate::domain::push`].

use crate::domain::event::{EventPayload, GitHubEvent, IssueAction, IssuesPayload};

/// Renders the status line for `event`. `push_line` is used verbatim for
/// push events. Returns `None` for event types that produce no line.
pub fn render_event(event: &GitHubEvent, display: &str, push_line: Option<String>) -> Option<String> {
    let full = &event.repo.name;
    let line = match &event.payload {
        EventPayload::CommitComment { comment } => format!(
            "Last seen [commenting on a commit]({}) in [{display}](https://github.com/{full})",
            comment.html_url
        ),
        EventPayload::Create => {
            format!("Last seen creating [{display}](https://github.com/{full})")
        }
        EventPayload::Delete => "Last seen deleting a repository".to_string(),
        EventPayload::Fork { forkee } => format!(
            "Last seen making a [fork](https://github.com/{display}) of [{}]({})",
            forkee.name, forkee.html_url
        ),
        EventPayload::IssueComment { issue } => format!(
            "Last seen commenting on [{}]({}) in [{display}](https://github.com/{full})",
            issue.number, issue.html_url
        ),
        EventPayload::Issues(payload) => format!(
            "Last seen {} in [{display}]({})",
            issue_phrase(payload),
            payload.issue.html_url
        ),
        EventPayload::Member { member } => format!(
            "Last seen inviting [{}]({}) to work on https://github.com/{display}",
            member.display_name(),
            member.profile_url()
        ),
        EventPayload::Public => {
            format!("Last seen publicizing [{full}](https://github.com/{full})")
        }
        EventPayload::PullRequestReview { pull_request } => format!(
            "Last seen reviewing [{}]({}) in [{display}]({})",
            pull_request.number, pull_request.html_url, pull_request.html_url
        ),
        EventPayload::PullRequestReviewComment {
            comment,
            pull_request,
        } => format!(
            "Last seen [commenting]({}) on [#{}]({})",
            comment.html_url, pull_request.id, pull_request.html_url
        ),
        EventPayload::Push(_) => return push_line,
        EventPayload::Release { release } => format!(
            "Last seen publishing a [release]({}) for [{display}](https://github.com/{full})",
            release.html_url
        ),
        EventPayload::Sponsorship => format!("Last seen sponsoring {display}"),
        EventPayload::Watch => format!("Last seen watching {display}"),
        EventPayload::Gollum
        | EventPayload::PullRequest
        | EventPayload::PullRequestReviewThread
        | EventPayload::Unsupported(_) => return None,
    };
    Some(line)
}

fn issue_phrase(payload: &IssuesPayload) -> String {
    let number = payload.issue.number;
    let link = format!("[#{number}]({})", payload.issue.html_url);
    match (payload.action, &payload.assignee) {
        (IssueAction::Opened, _) => format!("opening {link}"),
        (IssueAction::Edited, _) => format!("editing {link}"),
        (IssueAction::Closed, _) => format!("closing {link}"),
        (IssueAction::Reopened, _) => format!("reopening {link}"),
        (IssueAction::Assigned, Some(assignee)) => {
            format!("assigning {link} to {}", assignee.display_name())
        }
        (IssueAction::Assigned, None) | (IssueAction::Other, _) => format!("working on {number}"),
    }
}
