//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod environment_repository;
mod lookup_factory;
mod output_sink;

pub use environment_repository::ProcessEnvironmentRepository;
pub use lookup_factory::GraphqlLookupFactory;
pub use output_sink::GithubEnvFileSink;
