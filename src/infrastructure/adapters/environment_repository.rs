//! 실행 환경 로딩 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::EnvironmentRepository;
use crate::infrastructure::config::ActionsEnvironment;

/// 프로세스 환경 변수 기반 저장소 어댑터.
pub struct ProcessEnvironmentRepository;

impl EnvironmentRepository for ProcessEnvironmentRepository {
    fn load(&self) -> Result<ActionsEnvironment> {
        ActionsEnvironment::from_process_env()
    }
}
