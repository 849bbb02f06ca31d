//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::event::RepositoryId;
use crate::infrastructure::config::ActionsEnvironment;

/// GitHub Actions 환경 변수 로딩 포트.
pub trait EnvironmentRepository: Send + Sync {
    fn load(&self) -> Result<ActionsEnvironment>;
}

/// 커밋과 연관된 병합 PR 번호를 조회하는 포트.
///
/// 전송 실패는 `Ok(None)`으로 흡수하고, 응답 형식/업스트림 오류만 `Err`로 올린다.
#[async_trait]
pub trait PullRequestLookup: Send + Sync {
    async fn associated_pull_request(
        &self,
        repository: &RepositoryId,
        sha: &str,
    ) -> Result<Option<u64>>;
}

/// 엔드포인트/토큰에 맞는 조회 클라이언트를 생성하는 팩토리 포트.
pub trait PullRequestLookupFactory: Send + Sync {
    fn build(&self, endpoint: &str, token: &str) -> Box<dyn PullRequestLookup>;
}

/// 후속 step에 변수를 넘기는 출력 포트.
pub trait OutputSink: Send + Sync {
    fn export(&self, target: &Path, name: &str, value: &str) -> Result<()>;
}
