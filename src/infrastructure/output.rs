//! `$GITHUB_ENV` 파일 기록.
//! 각 step은 별도 셸에서 실행되므로 러너가 읽는 파일에 `NAME=value` 줄을 덧붙인다.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

const DELIMITER_PREFIX: &str = "SLACK_TEMPLATES_EOF";

/// 변수 한 개를 파일 끝에 추가한다. 값에 줄바꿈이 있으면 heredoc 구분자 문법을 쓴다.
pub fn append_env_variable(path: &Path, name: &str, value: &str) -> Result<()> {
    let entry = format_env_entry(name, value)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.write_all(entry.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn format_env_entry(name: &str, value: &str) -> Result<String> {
    if name.is_empty() || name.contains(['=', '\n']) {
        bail!("invalid environment variable name: {name:?}");
    }

    if !value.contains('\n') {
        return Ok(format!("{name}={value}\n"));
    }

    let mut delimiter = DELIMITER_PREFIX.to_string();
    while value.lines().any(|line| line == delimiter) {
        delimiter.push('_');
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}
