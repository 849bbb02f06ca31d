//! Slack 메시지를 만들어 `SLACK_MESSAGE`로 내보내는 유스케이스.

mod format;
mod resolver;

use anyhow::{Context, Result};

use crate::application::ports::{EnvironmentRepository, OutputSink, PullRequestLookupFactory};
use crate::domain::notification::RunOptions;

use format::build_message;
pub use resolver::EventResolver;

/// 후속 step이 읽는 변수 이름.
pub const MESSAGE_VARIABLE: &str = "SLACK_MESSAGE";

/// 환경 로딩부터 메시지 조립, 출력 파일 기록까지 전체 흐름을 조율한다.
pub struct SetSlackMessageUseCase<'a> {
    pub environment_repo: &'a dyn EnvironmentRepository,
    pub lookup_factory: &'a dyn PullRequestLookupFactory,
    pub output_sink: &'a dyn OutputSink,
}

impl<'a> SetSlackMessageUseCase<'a> {
    /// 실행 진입점. 내보낸 메시지를 반환한다.
    pub async fn execute(&self, options: RunOptions) -> Result<String> {
        let environment = self
            .environment_repo
            .load()
            .context("failed to load GitHub Actions environment")?;

        let ctx = environment.event_context(options.pr_number);
        tracing::debug!(
            event = ctx.event_kind.name(),
            actor = %ctx.actor,
            repository = %ctx.repository,
            pr_number = ?ctx.known_pr_number,
            "loaded event context"
        );

        let lookup = self
            .lookup_factory
            .build(environment.graphql_url.as_str(), &options.token);
        let resolver = EventResolver::new(&ctx, lookup.as_ref());
        let message = build_message(&resolver, &options.request).await?;

        self.output_sink
            .export(&environment.env_file, MESSAGE_VARIABLE, &message)
            .with_context(|| {
                format!(
                    "failed to export {MESSAGE_VARIABLE} to {}",
                    environment.env_file.display()
                )
            })?;
        tracing::info!(%message, "exported {MESSAGE_VARIABLE}");

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use anyhow::bail;
    use url::Url;

    use super::resolver::tests::FakeLookup;
    use super::*;
    use crate::application::ports::PullRequestLookup;
    use crate::domain::notification::NotificationRequest;
    use crate::infrastructure::config::ActionsEnvironment;

    struct FakeEnvironment(Option<ActionsEnvironment>);

    impl EnvironmentRepository for FakeEnvironment {
        fn load(&self) -> Result<ActionsEnvironment> {
            match &self.0 {
                Some(env) => Ok(env.clone()),
                None => bail!("missing required environment variable $GITHUB_ACTOR"),
            }
        }
    }

    struct FakeFactory {
        lookup: Arc<FakeLookup>,
        built_with: Mutex<Vec<(String, String)>>,
    }

    struct SharedLookup(Arc<FakeLookup>);

    #[async_trait::async_trait]
    impl PullRequestLookup for SharedLookup {
        async fn associated_pull_request(
            &self,
            repository: &crate::domain::event::RepositoryId,
            sha: &str,
        ) -> Result<Option<u64>> {
            self.0.associated_pull_request(repository, sha).await
        }
    }

    impl PullRequestLookupFactory for FakeFactory {
        fn build(&self, endpoint: &str, token: &str) -> Box<dyn PullRequestLookup> {
            self.built_with
                .lock()
                .unwrap()
                .push((endpoint.to_string(), token.to_string()));
            Box::new(SharedLookup(self.lookup.clone()))
        }
    }

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<(PathBuf, String, String)>>);

    impl OutputSink for RecordingSink {
        fn export(&self, target: &Path, name: &str, value: &str) -> Result<()> {
            self.0
                .lock()
                .unwrap()
                .push((target.to_path_buf(), name.to_string(), value.to_string()));
            Ok(())
        }
    }

    fn environment(event_name: &str) -> ActionsEnvironment {
        ActionsEnvironment {
            actor: "alice".into(),
            repository: "octo-org/hello-world".into(),
            server_url: "https://github.com".into(),
            event_name: event_name.into(),
            sha: "c0ffee".into(),
            run_id: "55".into(),
            workflow: "CI".into(),
            branch: "main".into(),
            graphql_url: Url::parse("https://api.github.com/graphql").unwrap(),
            env_file: PathBuf::from("/tmp/github_env"),
        }
    }

    #[tokio::test]
    async fn exports_result_message_with_token_and_endpoint() {
        let env = FakeEnvironment(Some(environment("push")));
        let factory = FakeFactory {
            lookup: Arc::new(FakeLookup::returning(Some(5))),
            built_with: Mutex::new(Vec::new()),
        };
        let sink = RecordingSink::default();
        let use_case = SetSlackMessageUseCase {
            environment_repo: &env,
            lookup_factory: &factory,
            output_sink: &sink,
        };

        let message = use_case
            .execute(RunOptions {
                request: NotificationRequest::Result {
                    job_results: vec!["failure".into(), "cancelled".into()],
                },
                token: "ghs_secret".into(),
                pr_number: None,
            })
            .await
            .unwrap();

        assert!(message.contains(
            "*failure* for merge of <https://github.com/octo-org/hello-world/pull/5|#5> to"
        ));
        assert_eq!(
            factory.built_with.lock().unwrap()[0],
            ("https://api.github.com/graphql".to_string(), "ghs_secret".to_string())
        );
        assert_eq!(factory.lookup.call_count(), 1);

        let exported = sink.0.lock().unwrap();
        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].0, PathBuf::from("/tmp/github_env"));
        assert_eq!(exported[0].1, "SLACK_MESSAGE");
        assert_eq!(exported[0].2, message);
    }

    #[tokio::test]
    async fn missing_environment_is_fatal_and_exports_nothing() {
        let env = FakeEnvironment(None);
        let factory = FakeFactory {
            lookup: Arc::new(FakeLookup::returning(None)),
            built_with: Mutex::new(Vec::new()),
        };
        let sink = RecordingSink::default();
        let use_case = SetSlackMessageUseCase {
            environment_repo: &env,
            lookup_factory: &factory,
            output_sink: &sink,
        };

        let err = use_case
            .execute(RunOptions {
                request: NotificationRequest::Custom {
                    message: "hi".into(),
                },
                token: String::new(),
                pr_number: None,
            })
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("GITHUB_ACTOR"));
        assert!(sink.0.lock().unwrap().is_empty());
    }
}
