//! 출력 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::OutputSink;
use crate::infrastructure::output::append_env_variable;

/// `$GITHUB_ENV` 파일에 변수를 덧붙이는 어댑터.
pub struct GithubEnvFileSink;

impl OutputSink for GithubEnvFileSink {
    fn export(&self, target: &Path, name: &str, value: &str) -> Result<()> {
        append_env_variable(target, name, value)
    }
}
