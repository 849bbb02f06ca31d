//! 실행 환경 타입 정의.

use std::path::PathBuf;

use url::Url;

use crate::domain::event::{EventContext, EventKind};

/// 러너가 제공하는 GitHub Actions 환경 변수 묶음.
#[derive(Debug, Clone)]
pub struct ActionsEnvironment {
    pub actor: String,
    pub repository: String,
    pub server_url: String,
    pub event_name: String,
    pub sha: String,
    pub run_id: String,
    pub workflow: String,
    pub branch: String,
    pub graphql_url: Url,
    /// 후속 step으로 변수를 넘기는 `$GITHUB_ENV` 파일 경로.
    pub env_file: PathBuf,
}

impl ActionsEnvironment {
    /// 인자로 받은 PR 번호를 합쳐 이벤트 스냅샷을 만든다.
    pub fn event_context(&self, known_pr_number: Option<u64>) -> EventContext {
        EventContext {
            actor: self.actor.clone(),
            repository: self.repository.clone(),
            server_url: self.server_url.clone(),
            event_kind: EventKind::from_name(&self.event_name),
            sha: self.sha.clone(),
            run_id: self.run_id.clone(),
            workflow: self.workflow.clone(),
            branch: self.branch.clone(),
            known_pr_number,
        }
    }
}
