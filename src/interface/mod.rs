//! Interface layer
//! 명령행 입력 파싱과 실행 조립(composition root)을 담당한다.

pub mod cli;
