//! 알림 요청 엔티티와 템플릿 선택 규칙.

use anyhow::{Context, Result};

/// 첫 번째 인자로 지정되는 템플릿 종류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Result,
    Reviewers,
    Assignee,
    Custom,
    Unrecognized(String),
}

impl Template {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "result" => Self::Result,
            "reviewers" => Self::Reviewers,
            "assignee" => Self::Assignee,
            "custom" => Self::Custom,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// 위치 인자를 그대로 담은 원시 입력.
#[derive(Debug, Clone, Default)]
pub struct TemplateArgs {
    pub template: String,
    pub results: String,
    pub message: String,
    pub token: String,
    pub author: String,
    pub reviewers: String,
    pub assignee: String,
    pub pr_number: Option<String>,
}

/// 한 번의 실행에서 보낼 알림. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationRequest {
    Result { job_results: Vec<String> },
    Reviewers { reviewers: String, author: String },
    Assignee { assignee: String, author: String },
    Custom { message: String },
}

/// 템플릿 해석 결과. PR 번호는 이벤트 컨텍스트로 전달된다.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub request: NotificationRequest,
    pub token: String,
    pub pr_number: Option<u64>,
}

impl RunOptions {
    /// 템플릿별 인자 규칙을 적용한다.
    /// - result: PR 번호가 비었거나 숫자가 아니면 "알 수 없음"으로 둔다.
    /// - reviewers/assignee: PR 번호가 필수이며 정수여야 한다.
    /// - 알 수 없는 템플릿은 실행을 멈추지 않고 안내 문구를 custom 알림으로 보낸다.
    pub fn from_args(args: TemplateArgs) -> Result<Self> {
        let template = Template::parse(&args.template);
        let pr_arg = args.pr_number.as_deref().unwrap_or("").trim();

        let (request, pr_number) = match template {
            Template::Result => (
                NotificationRequest::Result {
                    job_results: args.results.split_whitespace().map(str::to_string).collect(),
                },
                pr_arg.parse::<u64>().ok(),
            ),
            Template::Reviewers => (
                NotificationRequest::Reviewers {
                    reviewers: args.reviewers,
                    author: args.author,
                },
                Some(required_pr_number(pr_arg, "reviewers")?),
            ),
            Template::Assignee => (
                NotificationRequest::Assignee {
                    assignee: args.assignee,
                    author: args.author,
                },
                Some(required_pr_number(pr_arg, "assignee")?),
            ),
            Template::Custom => (
                NotificationRequest::Custom {
                    message: args.message,
                },
                None,
            ),
            Template::Unrecognized(name) => (
                NotificationRequest::Custom {
                    message: unrecognized_template_message(&name),
                },
                None,
            ),
        };

        Ok(Self {
            request,
            token: args.token,
            pr_number,
        })
    }
}

fn required_pr_number(raw: &str, template: &str) -> Result<u64> {
    raw.parse::<u64>().with_context(|| {
        format!("the {template} template requires an integer pull request number; got: {raw:?}")
    })
}

pub fn unrecognized_template_message(template: &str) -> String {
    format!(
        "Unrecognized template passed to slack-templates: {template}. Valid options are \
         \"result,\" \"reviewers,\" \"assignee,\" or \"custom.\""
    )
}

/// 잡 결과 목록을 하나의 요약 단어로 줄인다.
pub fn summarize_job_results(job_results: &[String]) -> String {
    if job_results.iter().all(|r| r == "skipped") {
        return "skipped".to_string();
    }
    if job_results.iter().all(|r| r == "success" || r == "skipped") {
        return "success".to_string();
    }

    // 실패한 워크플로는 목록에 있는 가장 심각한 결과를 쓴다.
    ["failure", "cancelled"]
        .into_iter()
        .find(|severe| job_results.iter().any(|r| r == *severe))
        .map(str::to_string)
        .unwrap_or_else(|| job_results.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(raw: &str) -> Vec<String> {
        raw.split_whitespace().map(str::to_string).collect()
    }

    fn args(template: &str, pr_number: Option<&str>) -> TemplateArgs {
        TemplateArgs {
            template: template.to_string(),
            results: "success skipped".to_string(),
            message: "hello *world*".to_string(),
            token: "token".to_string(),
            author: "alice".to_string(),
            reviewers: "*bob*".to_string(),
            assignee: "bob".to_string(),
            pr_number: pr_number.map(str::to_string),
        }
    }

    #[test]
    fn all_skipped_is_skipped() {
        assert_eq!(summarize_job_results(&results("skipped")), "skipped");
        assert_eq!(summarize_job_results(&results("skipped skipped skipped")), "skipped");
    }

    #[test]
    fn success_and_skipped_is_success() {
        assert_eq!(summarize_job_results(&results("success")), "success");
        assert_eq!(summarize_job_results(&results("skipped success skipped")), "success");
    }

    #[test]
    fn failure_takes_precedence_over_cancelled() {
        assert_eq!(summarize_job_results(&results("cancelled success failure")), "failure");
        assert_eq!(summarize_job_results(&results("failure cancelled")), "failure");
    }

    #[test]
    fn cancelled_without_failure() {
        assert_eq!(summarize_job_results(&results("success cancelled skipped")), "cancelled");
    }

    #[test]
    fn unknown_mixture_is_joined_verbatim() {
        assert_eq!(summarize_job_results(&results("unknown-status")), "unknown-status");
        assert_eq!(summarize_job_results(&results("success neutral")), "success neutral");
    }

    #[test]
    fn result_template_tolerates_missing_pr_number() {
        let options = RunOptions::from_args(args("result", Some(""))).unwrap();
        assert_eq!(options.pr_number, None);
        assert_eq!(
            options.request,
            NotificationRequest::Result {
                job_results: results("success skipped")
            }
        );

        let options = RunOptions::from_args(args("result", None)).unwrap();
        assert_eq!(options.pr_number, None);

        let options = RunOptions::from_args(args("result", Some("17"))).unwrap();
        assert_eq!(options.pr_number, Some(17));
    }

    #[test]
    fn assignee_and_reviewers_require_integer_pr_number() {
        let options = RunOptions::from_args(args("assignee", Some("42"))).unwrap();
        assert_eq!(options.pr_number, Some(42));
        assert_eq!(
            options.request,
            NotificationRequest::Assignee {
                assignee: "bob".into(),
                author: "alice".into()
            }
        );

        assert!(RunOptions::from_args(args("reviewers", Some("abc"))).is_err());
        assert!(RunOptions::from_args(args("assignee", None)).is_err());
    }

    #[test]
    fn custom_template_keeps_message_verbatim() {
        let options = RunOptions::from_args(args("custom", None)).unwrap();
        assert_eq!(
            options.request,
            NotificationRequest::Custom {
                message: "hello *world*".into()
            }
        );
    }

    #[test]
    fn unrecognized_template_falls_back_to_custom() {
        let options = RunOptions::from_args(args("results", Some("x"))).unwrap();
        let NotificationRequest::Custom { message } = options.request else {
            panic!("expected custom notification");
        };
        assert!(message.starts_with("Unrecognized template passed to slack-templates: results."));
        assert!(message.contains("\"custom.\""));
    }
}
