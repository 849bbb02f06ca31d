//! 워크플로를 트리거한 GitHub Actions 이벤트 메타데이터 값 객체.

use anyhow::{Result, bail};

/// 이벤트 종류. pull_request/push 외에는 이름만 보존한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    PullRequest,
    Push,
    Other(String),
}

impl EventKind {
    /// `$GITHUB_EVENT_NAME` 값을 이벤트 종류로 변환한다.
    pub fn from_name(name: &str) -> Self {
        match name {
            "pull_request" => Self::PullRequest,
            "push" => Self::Push,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::PullRequest => "pull_request",
            Self::Push => "push",
            Self::Other(name) => name,
        }
    }
}

/// `owner/name` 형식으로 검증된 저장소 식별자.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    pub owner: String,
    pub name: String,
}

impl RepositoryId {
    /// 슬래시가 정확히 하나이고 양쪽이 비어 있지 않아야 한다.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => bail!("expected $GITHUB_REPOSITORY to match '<owner>/<name>'; got: {raw}"),
        }
    }
}

/// 한 번의 실행 동안 읽기 전용으로 쓰이는 이벤트 스냅샷.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub actor: String,
    /// 원본 `owner/name` 문자열. 조회가 필요할 때만 [`RepositoryId`]로 검증한다.
    pub repository: String,
    pub server_url: String,
    pub event_kind: EventKind,
    pub sha: String,
    pub run_id: String,
    pub workflow: String,
    /// pull_request는 head 브랜치, 그 외는 ref 이름.
    pub branch: String,
    pub known_pr_number: Option<u64>,
}

impl EventContext {
    pub fn repository_url(&self) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            self.repository
        )
    }

    /// push 이벤트이면서 PR 번호를 모를 때만 원격 조회가 필요하다.
    pub fn needs_association_lookup(&self) -> bool {
        self.event_kind == EventKind::Push && self.known_pr_number.is_none()
    }
}
