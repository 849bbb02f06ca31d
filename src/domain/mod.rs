//! Domain layer
//! 알림 요청, 이벤트 컨텍스트, 메시지 문구 규칙을 외부 의존성 없이 표현한다.

pub mod event;
pub mod message;
pub mod notification;
