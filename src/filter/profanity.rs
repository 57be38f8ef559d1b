//! 욕설/비속어 필터
//!
//! 3단계 독립 검사로 동작하며 하나라도 걸리면 거부합니다:
//! 1. 한국어 리터럴 부분 문자열 매칭
//! 2. 초성 축약 매칭 (예: "시발" → "ㅅㅂ" 같은 초성 표기 적발)
//! 3. 영문 리터럴 부분 문자열 매칭 (대소문자 무시)
//!
//! 초성 매칭은 의도적으로 오탐을 허용하는 휴리스틱입니다.
//! 초성이 우연히 금지어의 초성과 겹치는 무해한 문자열도 거부되지만,
//! 한국 넷 속어에서 흔한 초성 축약 욕설을 잡으려면 감수해야 하는
//! 트레이드오프입니다.

use std::sync::LazyLock;

use crate::hangul::extract_initials;

use super::wordlist::{KOREAN_BADWORDS, LATIN_BADWORDS};

/// 한국어 욕설 리터럴의 초성 투영 목록
///
/// KOREAN_BADWORDS와 같은 순서의 병렬 시퀀스 (중복 제거 안 함)
static BAD_INITIALS: LazyLock<Vec<String>> = LazyLock::new(|| {
    KOREAN_BADWORDS
        .iter()
        .map(|word| extract_initials(word))
        .collect()
});

/// 후보 문자열에 금지어가 포함되어 있는지 검사
///
/// true면 거부 대상
pub fn contains_banned_word(candidate: &str) -> bool {
    let lowered = candidate.to_lowercase();

    // 1. 한국어 리터럴 매칭
    if KOREAN_BADWORDS.iter().any(|word| lowered.contains(word)) {
        return true;
    }

    // 2. 초성 축약 매칭
    let initials = extract_initials(&lowered);
    if BAD_INITIALS
        .iter()
        // 빈 투영은 모든 문자열에 포함되므로 제외
        .any(|proj| !proj.is_empty() && initials.contains(proj.as_str()))
    {
        return true;
    }

    // 3. 영문 리터럴 매칭
    LATIN_BADWORDS.iter().any(|word| lowered.contains(word))
}
