//! 연관 PR 조회 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::ports::{PullRequestLookup, PullRequestLookupFactory};
use crate::domain::event::RepositoryId;
use crate::infrastructure::github::GitHubGraphqlClient;

/// GraphQL 클라이언트 팩토리 어댑터.
pub struct GraphqlLookupFactory;

impl PullRequestLookupFactory for GraphqlLookupFactory {
    fn build(&self, endpoint: &str, token: &str) -> Box<dyn PullRequestLookup> {
        Box::new(GraphqlLookupAdapter {
            inner: GitHubGraphqlClient::new(endpoint.to_string(), token.to_string()),
        })
    }
}

/// 인프라 GraphQL 클라이언트를 애플리케이션 포트로 감싸는 래퍼.
struct GraphqlLookupAdapter {
    inner: GitHubGraphqlClient,
}

#[async_trait]
impl PullRequestLookup for GraphqlLookupAdapter {
    async fn associated_pull_request(
        &self,
        repository: &RepositoryId,
        sha: &str,
    ) -> Result<Option<u64>> {
        self.inner.associated_pull_request(repository, sha).await
    }
}
