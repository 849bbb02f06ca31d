//! GitHub Actions 실행 환경(환경 변수) 로딩 모듈.
//! 러너가 주입하는 변수를 검증된 타입으로 읽어 이벤트 컨텍스트를 구성한다.

mod loader;
mod types;

use anyhow::Result;

pub use loader::vars;
pub use types::ActionsEnvironment;

impl ActionsEnvironment {
    /// 현재 프로세스 환경 변수에서 로딩한다.
    pub fn from_process_env() -> Result<Self> {
        loader::load_with(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로 로딩한다. 테스트와 임베딩 용도.
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        loader::load_with(lookup)
    }
}
