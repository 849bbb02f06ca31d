//! 환경 변수 조회/검증 로더.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use url::Url;

use super::types::ActionsEnvironment;

/// GitHub Actions가 주입하는 기본 환경 변수 이름.
pub mod vars {
    pub const ACTOR: &str = "GITHUB_ACTOR";
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
    pub const SERVER_URL: &str = "GITHUB_SERVER_URL";
    pub const EVENT_NAME: &str = "GITHUB_EVENT_NAME";
    pub const SHA: &str = "GITHUB_SHA";
    pub const RUN_ID: &str = "GITHUB_RUN_ID";
    pub const WORKFLOW: &str = "GITHUB_WORKFLOW";
    pub const HEAD_REF: &str = "GITHUB_HEAD_REF";
    pub const REF_NAME: &str = "GITHUB_REF_NAME";
    pub const GRAPHQL_URL: &str = "GITHUB_GRAPHQL_URL";
    pub const ENV_FILE: &str = "GITHUB_ENV";
}

/// 필수 변수를 모두 읽는다. 하나라도 없으면 변수 이름을 담아 실패한다.
pub(crate) fn load_with<F>(lookup: F) -> Result<ActionsEnvironment>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| -> Result<String> {
        lookup(key).with_context(|| format!("missing required environment variable ${key}"))
    };

    let event_name = required(vars::EVENT_NAME)?;
    // pull_request는 head(from) 브랜치, 그 외는 push된 ref 이름을 쓴다.
    let branch = if event_name == "pull_request" {
        required(vars::HEAD_REF)?
    } else {
        required(vars::REF_NAME)?
    };

    let raw_graphql_url = required(vars::GRAPHQL_URL)?;
    let graphql_url = Url::parse(&raw_graphql_url)
        .with_context(|| format!("invalid ${}: {raw_graphql_url}", vars::GRAPHQL_URL))?;
    if !matches!(graphql_url.scheme(), "http" | "https") {
        bail!(
            "${} must be an http(s) URL; got: {raw_graphql_url}",
            vars::GRAPHQL_URL
        );
    }

    let env_file = required(vars::ENV_FILE)?;
    if env_file.trim().is_empty() {
        bail!("${} is empty", vars::ENV_FILE);
    }

    Ok(ActionsEnvironment {
        actor: required(vars::ACTOR)?,
        repository: required(vars::REPOSITORY)?,
        server_url: required(vars::SERVER_URL)?,
        event_name,
        sha: required(vars::SHA)?,
        run_id: required(vars::RUN_ID)?,
        workflow: required(vars::WORKFLOW)?,
        branch,
        graphql_url,
        env_file: PathBuf::from(env_file),
    })
}
