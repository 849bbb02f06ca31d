//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::set_slack_message::SetSlackMessageUseCase;
use crate::infrastructure::adapters::{
    GithubEnvFileSink, GraphqlLookupFactory, ProcessEnvironmentRepository,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    environment_repo: ProcessEnvironmentRepository,
    lookup_factory: GraphqlLookupFactory,
    output_sink: GithubEnvFileSink,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            environment_repo: ProcessEnvironmentRepository,
            lookup_factory: GraphqlLookupFactory,
            output_sink: GithubEnvFileSink,
        }
    }
}

impl AppComposition {
    /// 메시지 설정 유스케이스를 생성한다.
    pub fn set_slack_message_usecase(&self) -> SetSlackMessageUseCase<'_> {
        SetSlackMessageUseCase {
            environment_repo: &self.environment_repo,
            lookup_factory: &self.lookup_factory,
            output_sink: &self.output_sink,
        }
    }
}
