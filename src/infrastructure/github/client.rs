//! GitHub GraphQL API 클라이언트.

use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

use super::response::parse_associated_pull_request;
use crate::domain::event::RepositoryId;

const PULL_REQUEST_FOR_COMMIT_QUERY: &str = include_str!("pull_request_for_commit.graphql");

pub struct GitHubGraphqlClient {
    client: Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: CommitVariables<'a>,
}

#[derive(Debug, Serialize)]
struct CommitVariables<'a> {
    owner: &'a str,
    repo: &'a str,
    oid: &'a str,
}

impl GitHubGraphqlClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self::with_client(Client::new(), endpoint, token)
    }

    pub fn with_client(client: Client, endpoint: String, token: String) -> Self {
        Self {
            client,
            endpoint,
            token,
        }
    }

    /// 커밋을 들여온 병합 PR 번호를 조회한다.
    ///
    /// 네트워크/HTTP 상태 실패는 경고만 남기고 `None`을 반환한다.
    /// 응답이 JSON 객체가 아니거나 GraphQL 오류/형식 오류가 있으면 `Err`.
    pub async fn associated_pull_request(
        &self,
        repository: &RepositoryId,
        sha: &str,
    ) -> Result<Option<u64>> {
        let Some(body) = self.post_commit_query(repository, sha).await else {
            return Ok(None);
        };

        Ok(parse_associated_pull_request(&body, sha)?)
    }

    async fn post_commit_query(&self, repository: &RepositoryId, sha: &str) -> Option<String> {
        let request = GraphqlRequest {
            query: PULL_REQUEST_FOR_COMMIT_QUERY,
            variables: CommitVariables {
                owner: &repository.owner,
                repo: &repository.name,
                oid: sha,
            },
        };

        let resp = match self
            .client
            .post(&self.endpoint)
            .header("User-Agent", "slack-templates")
            .header("Accept", "application/vnd.github.v4.json")
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    endpoint = %self.endpoint,
                    "github: GraphQL request failed"
                );
                return None;
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(
                %status,
                endpoint = %self.endpoint,
                "github: GraphQL request was not successful"
            );
            return None;
        }

        match resp.text().await {
            Ok(body) => Some(body),
            Err(err) => {
                tracing::warn!(error = %err, "github: failed to read GraphQL response body");
                None
            }
        }
    }
}
