//! slack-templates library root.
//! GitHub Actions 이벤트를 설명하는 Slack 메시지를 만들어 `SLACK_MESSAGE`로 내보낸다.
//! Clean Architecture 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
