//! 사용자 입력 닉네임 검증
//!
//! 외부에서 입력된 닉네임에 구조 규칙(길이, 공백, 문자 집합)을
//! 순서대로 적용하고, 마지막으로 욕설 필터에 위임합니다.
//! 순수 함수이며 레지스트리를 건드리지 않습니다.

use std::fmt;

use crate::filter::contains_banned_word;
use crate::hangul::{is_complete_hangul, is_consonant_jamo, is_vowel_jamo};

/// 닉네임 최대 길이 (표시 문자 단위)
pub const MAX_NICKNAME_CHARS: usize = 20;

/// 거부 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// 빈 닉네임 (공백만 있는 경우 포함)
    Empty,
    /// 20자 초과
    TooLong,
    /// 내부 공백 포함
    ContainsWhitespace,
    /// 허용되지 않는 문자 포함
    InvalidCharacter,
    /// 금지어 포함
    Inappropriate,
}

impl RejectReason {
    /// 사용자에게 표시할 사유 문자열
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::Empty => "empty nickname",
            RejectReason::TooLong => "exceeds 20 characters",
            RejectReason::ContainsWhitespace => "whitespace not allowed",
            RejectReason::InvalidCharacter => "special characters not allowed",
            RejectReason::Inappropriate => "contains inappropriate word",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// 검증 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    /// 최종 판정
    pub is_valid: bool,
    /// 거부 사유 (유효하면 None)
    pub reason: Option<RejectReason>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    fn invalid(reason: RejectReason) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
        }
    }
}

/// 사용자 닉네임에 허용되는 문자인지 확인
///
/// 한글 음절, 자음/모음 자모, 영문 대소문자, 숫자 허용.
/// 생성기의 `is_generated_char`보다 넓은 규칙이며, 두 규칙은
/// 의도적으로 분리되어 있다 (사용자 입력은 영문 닉네임 허용).
fn is_allowed_user_char(ch: char) -> bool {
    is_complete_hangul(ch)
        || is_consonant_jamo(ch)
        || is_vowel_jamo(ch)
        || ch.is_ascii_alphanumeric()
}

/// 사용자 입력 닉네임 검증
///
/// 규칙을 순서대로 적용하고 첫 번째 실패에서 멈춥니다:
/// 1. 앞뒤 공백 제거 후 비어 있으면 거부
/// 2. 20자 초과 거부
/// 3. 내부 공백 거부
/// 4. 허용 문자 집합 밖의 문자 거부
/// 5. 욕설 필터에 걸리면 거부
pub fn validate_user_nickname(candidate: &str) -> ValidationResult {
    let trimmed = candidate.trim();

    // 1. 빈 닉네임
    if trimmed.is_empty() {
        return ValidationResult::invalid(RejectReason::Empty);
    }

    // 2. 길이 초과
    if trimmed.chars().count() > MAX_NICKNAME_CHARS {
        return ValidationResult::invalid(RejectReason::TooLong);
    }

    // 3. 내부 공백
    if trimmed.chars().any(char::is_whitespace) {
        return ValidationResult::invalid(RejectReason::ContainsWhitespace);
    }

    // 4. 문자 집합
    if !trimmed.chars().all(is_allowed_user_char) {
        return ValidationResult::invalid(RejectReason::InvalidCharacter);
    }

    // 5. 금지어
    if contains_banned_word(trimmed) {
        return ValidationResult::invalid(RejectReason::Inappropriate);
    }

    ValidationResult::valid()
}
