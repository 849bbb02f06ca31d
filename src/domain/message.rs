//! Slack 메시지 문구 정책(링크 형식, 템플릿별 문장 구성).

use crate::domain::event::EventContext;

const EVENTS_DOC_URL: &str =
    "https://docs.github.com/en/actions/reference/events-that-trigger-workflows";

/// Slack mrkdwn 링크 `<url|label>`.
pub fn slack_link(url: &str, label: &str) -> String {
    format!("<{url}|{label}>")
}

pub fn workflow_link(ctx: &EventContext) -> String {
    let url = format!("{}/actions/runs/{}", ctx.repository_url(), ctx.run_id);
    slack_link(&url, &format!("{} workflow", ctx.workflow))
}

fn pull_link(ctx: &EventContext, number: u64) -> String {
    let url = format!("{}/pull/{}", ctx.repository_url(), number);
    slack_link(&url, &format!("#{number}"))
}

fn commit_link(ctx: &EventContext) -> String {
    let url = format!("{}/commit/{}", ctx.repository_url(), ctx.sha);
    slack_link(&url, &ctx.sha)
}

/// pull_request 이벤트 링크. PR 번호를 모르면 커밋 링크로 대체한다.
pub fn pull_request_event_link(ctx: &EventContext) -> String {
    match ctx.known_pr_number {
        Some(number) => format!("{} from", pull_link(ctx, number)),
        None => format!("{} from", commit_link(ctx)),
    }
}

/// push 이벤트 링크. 연관 PR이 확인되면 merge, 아니면 push 커밋으로 표기한다.
pub fn push_event_link(ctx: &EventContext, associated_pr: Option<u64>) -> String {
    match associated_pr {
        Some(number) => format!("merge of {} to", pull_link(ctx, number)),
        None => format!("push of {} to", commit_link(ctx)),
    }
}

pub fn unexpected_event_link(name: &str) -> String {
    let url = format!("{EVENTS_DOC_URL}#{name}");
    format!("unexpected {} event", slack_link(&url, name))
}

/// 이벤트 링크 뒤에 브랜치/저장소 링크와 작성자를 덧붙인다.
/// 작성자는 비어 있지 않고 actor와 다를 때만 붙는다.
pub fn event_description(ctx: &EventContext, event_link: &str, author: Option<&str>) -> String {
    let repo_url = ctx.repository_url();
    let branch_link = slack_link(&format!("{repo_url}/commits/{}", ctx.branch), &ctx.branch);
    let repository_link = slack_link(&repo_url, &ctx.repository);

    let mut out = format!("{event_link} {branch_link} on {repository_link}");
    if let Some(author) = author.filter(|a| !a.is_empty() && *a != ctx.actor) {
        out.push_str(&format!(" by {author}"));
    }
    out
}

pub fn result_message(ctx: &EventContext, summary: &str, description: &str) -> String {
    format!(
        "{} *{}* for {} by {}.",
        workflow_link(ctx),
        summary,
        description,
        ctx.actor
    )
}

pub fn reviewers_message(ctx: &EventContext, reviewers: &str, description: &str) -> String {
    let request = if reviewers == format!("*{}*", ctx.actor) {
        "self-requests review".to_string()
    } else {
        format!("requests review from {reviewers}")
    };
    format!("{} {} of {}.", ctx.actor, request, description)
}

pub fn assignee_message(ctx: &EventContext, assignee: &str, description: &str) -> String {
    let assignment = if assignee == ctx.actor {
        "self-assigned".to_string()
    } else {
        format!("assigned *{assignee}* to")
    };
    format!("{} {} {}.", ctx.actor, assignment, description)
}
