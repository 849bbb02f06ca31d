//! 연관 PR 조회 응답 검증.

use serde_json::{Map, Value};
use thiserror::Error;

const CONNECTION_PATH: [&str; 4] = ["data", "repository", "object", "associatedPullRequests"];

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("github: response body is not valid JSON")]
    InvalidJson(#[from] serde_json::Error),
    #[error("github: expected a JSON object response; got: {body}")]
    NotAnObject { body: String },
    #[error("github: GraphQL request returned errors: {errors}")]
    Upstream { errors: String },
    #[error("github: malformed response at `{path}`: expected {expected}")]
    Malformed { path: String, expected: &'static str },
}

/// 응답 본문에서 병합 PR 번호를 꺼낸다.
///
/// - 최상위가 객체가 아니거나 `errors`가 있으면 오류.
/// - `data.repository.object.associatedPullRequests.nodes`가 배열이 아니면 오류.
/// - `totalCount == 1`이고 유일한 노드의 `mergeCommit.oid`가 `sha`와 같을 때만 `Some`.
pub fn parse_associated_pull_request(
    body: &str,
    sha: &str,
) -> Result<Option<u64>, LookupError> {
    let response: Value = serde_json::from_str(body)?;
    let Value::Object(root) = &response else {
        return Err(LookupError::NotAnObject {
            body: body.to_string(),
        });
    };

    if let Some(errors) = root.get("errors").filter(|e| has_errors(e)) {
        return Err(LookupError::Upstream {
            errors: errors.to_string(),
        });
    }

    let Some(connection) = walk_connection(root)? else {
        // 커밋이 GitHub에 없으면 object가 null로 온다.
        return Ok(None);
    };

    let nodes_path = format!("{}.nodes", CONNECTION_PATH.join("."));
    let nodes = connection
        .get("nodes")
        .and_then(Value::as_array)
        .ok_or_else(|| LookupError::Malformed {
            path: nodes_path.clone(),
            expected: "an array",
        })?;

    let total_count = connection.get("totalCount").and_then(Value::as_u64);
    let [node] = nodes.as_slice() else {
        return Ok(None);
    };
    if total_count != Some(1) {
        return Ok(None);
    }

    let merge_oid = node
        .get("mergeCommit")
        .and_then(|commit| commit.get("oid"))
        .and_then(Value::as_str);
    if merge_oid != Some(sha) {
        return Ok(None);
    }

    match node.get("number") {
        Some(number) => number
            .as_u64()
            .map(Some)
            .ok_or_else(|| LookupError::Malformed {
                path: format!("{nodes_path}[0].number"),
                expected: "an integer",
            }),
        None => Ok(None),
    }
}

/// 비어 있거나 거짓인 `errors`(`null`, `false`, `""`, `[]`, `{}`, `0`)는 오류로 보지 않는다.
fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(list) => !list.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// `data.repository.object.associatedPullRequests`까지 내려간다.
/// 중간 단계가 null이면 `None`, 객체가 아니면 경로를 담아 실패한다.
fn walk_connection(
    root: &Map<String, Value>,
) -> Result<Option<&Map<String, Value>>, LookupError> {
    let mut current = root;
    for (depth, key) in CONNECTION_PATH.iter().enumerate() {
        let path = CONNECTION_PATH[..=depth].join(".");
        let is_last = depth + 1 == CONNECTION_PATH.len();
        match current.get(*key) {
            Some(Value::Object(next)) => current = next,
            Some(Value::Null) if !is_last => return Ok(None),
            _ => {
                return Err(LookupError::Malformed {
                    path,
                    expected: "an object",
                });
            }
        }
    }
    Ok(Some(current))
}
