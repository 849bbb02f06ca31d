//! GitHub GraphQL API 연동.
//! push된 커밋을 브랜치에 들여온 병합 PR을 조회한다.

mod client;
mod response;

pub use client::GitHubGraphqlClient;
pub use response::{LookupError, parse_associated_pull_request};
