//! 닉네임 생성/검증 모듈
//!
//! 두 진입점을 제공합니다:
//! 1. **생성**: [`NicknameGenerator`] — 어휘 조합 + 숫자 접미사,
//!    레지스트리 유일성 보장, 재시도 한도 내 생성
//! 2. **검증**: [`validate_user_nickname`] — 사용자 입력 닉네임의
//!    구조/내용 검사 (부수 효과 없음)
//!
//! 생성 닉네임의 문자 규칙(한글 음절 + 숫자)은 사용자 입력 규칙
//! (한글 + 자모 + 영문 + 숫자)보다 의도적으로 좁습니다. 두 규칙은
//! 서로 다른 이름의 술어로 분리되어 있습니다.

mod generator;
mod registry;
mod validator;
mod vocab;

pub use generator::{GeneratorError, NicknameGenerator};
pub use registry::NicknameRegistry;
pub use validator::{
    validate_user_nickname, RejectReason, ValidationResult, MAX_NICKNAME_CHARS,
};
pub use vocab::{DEFAULT_ADJECTIVES, DEFAULT_NOUNS};
