//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::iter;

use anyhow::Result;
use clap::Parser;

use crate::domain::notification::{RunOptions, TemplateArgs};

/// 워크플로 step에서 넘기는 위치 인자. 빈 문자열도 유효한 값이다.
#[derive(Debug, Parser)]
#[command(name = "set-slack-message")]
#[command(about = "Set SLACK_MESSAGE for a GitHub Actions workflow event")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// result, reviewers, assignee, or custom
    #[arg(allow_hyphen_values = true)]
    template: String,

    /// Space-separated job results, e.g. "${{ join(needs.*.result, ' ') }}"
    #[arg(allow_hyphen_values = true)]
    results: String,

    /// Message for the custom template
    #[arg(allow_hyphen_values = true)]
    message: String,

    /// Token for the GitHub GraphQL API
    #[arg(allow_hyphen_values = true)]
    token: String,

    /// Login of the pull request author
    #[arg(allow_hyphen_values = true)]
    author: String,

    /// Requested reviewers, e.g. "*alice*, *bob*"
    #[arg(allow_hyphen_values = true)]
    reviewers: String,

    /// Login of the pull request assignee
    #[arg(allow_hyphen_values = true)]
    assignee: String,

    /// Pull request number (optional for the result template)
    #[arg(allow_hyphen_values = true)]
    pr_number: Option<String>,
}

impl Cli {
    /// 인자 개수 오류는 clap이 처리하고(종료 코드 2), 템플릿 규칙 위반은 `Err`로 돌려준다.
    pub fn parse_options() -> Result<RunOptions> {
        Self::try_parse_args(std::env::args_os())
            .unwrap_or_else(|err| err.exit())
            .into_options()
    }

    /// 프로그램 이름 뒤에 `--`를 끼워 넣어 `-h`, `--help`, `--`도 위치 값으로 받는다.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args
            .next()
            .unwrap_or_else(|| OsString::from("set-slack-message"));
        Cli::try_parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(args),
        )
    }

    pub fn into_options(self) -> Result<RunOptions> {
        RunOptions::from_args(TemplateArgs {
            template: self.template,
            results: self.results,
            message: self.message,
            token: self.token,
            author: self.author,
            reviewers: self.reviewers,
            assignee: self.assignee,
            pr_number: self.pr_number,
        })
    }
}
