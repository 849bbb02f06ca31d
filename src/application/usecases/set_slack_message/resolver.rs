//! 트리거 이벤트 설명 문구와 push 커밋의 연관 PR 해석.

use anyhow::Result;
use tokio::sync::OnceCell;

use crate::application::ports::PullRequestLookup;
use crate::domain::event::{EventContext, EventKind, RepositoryId};
use crate::domain::message;

/// 이벤트 컨텍스트에 묶인 해석기. 연관 PR 조회 결과는 실행 동안 한 번만 계산된다.
pub struct EventResolver<'a> {
    ctx: &'a EventContext,
    lookup: &'a dyn PullRequestLookup,
    association: OnceCell<Option<u64>>,
}

impl<'a> EventResolver<'a> {
    pub fn new(ctx: &'a EventContext, lookup: &'a dyn PullRequestLookup) -> Self {
        Self {
            ctx,
            lookup,
            association: OnceCell::new(),
        }
    }

    pub fn context(&self) -> &EventContext {
        self.ctx
    }

    /// 트리거 이벤트를 링크가 포함된 문장으로 설명한다.
    pub async fn describe_event(&self, author: Option<&str>) -> Result<String> {
        let event_link = self.event_link().await?;
        Ok(message::event_description(self.ctx, &event_link, author))
    }

    async fn event_link(&self) -> Result<String> {
        match &self.ctx.event_kind {
            EventKind::PullRequest => Ok(message::pull_request_event_link(self.ctx)),
            EventKind::Push => {
                let associated = self.associated_pr_number().await?;
                Ok(message::push_event_link(self.ctx, associated))
            }
            EventKind::Other(name) => Ok(message::unexpected_event_link(name)),
        }
    }

    /// push된 커밋을 브랜치에 들여온 병합 PR 번호.
    /// 트리거 메타데이터에 번호가 있으면 원격 조회를 건너뛴다.
    pub async fn associated_pr_number(&self) -> Result<Option<u64>> {
        if !self.ctx.needs_association_lookup() {
            return Ok(self.ctx.known_pr_number);
        }

        let resolved = self
            .association
            .get_or_try_init(|| async {
                let repository = RepositoryId::parse(&self.ctx.repository)?;
                let number = self
                    .lookup
                    .associated_pull_request(&repository, &self.ctx.sha)
                    .await?;
                match number {
                    Some(number) => tracing::debug!(
                        number,
                        sha = %self.ctx.sha,
                        "resolved associated pull request"
                    ),
                    None => tracing::debug!(
                        sha = %self.ctx.sha,
                        "no unique merged pull request for commit"
                    ),
                }
                Ok::<_, anyhow::Error>(number)
            })
            .await?;

        Ok(*resolved)
    }
}
