//! 정적 단어 목록 로드
//!
//! 욕설 목록은 빌드 시점에 바이너리에 포함되고(`include_str!`),
//! 최초 사용 시 한 번만 파싱되어 프로세스 수명 동안 불변으로 유지됩니다.

use std::sync::LazyLock;

/// 한국어 욕설 리터럴 목록 (한 줄에 한 단어)
const KOREAN_BADWORDS_RAW: &str = include_str!("badwords_ko.txt");

/// 영문 욕설 리터럴 목록 (외부 정적 단어 목록에서 가져옴, 모두 소문자)
const LATIN_BADWORDS_RAW: &str = include_str!("badwords_en.txt");

fn parse_lines(raw: &'static str) -> Vec<&'static str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// 한국어 욕설 리터럴
pub static KOREAN_BADWORDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| parse_lines(KOREAN_BADWORDS_RAW));

/// 영문 욕설 리터럴
pub static LATIN_BADWORDS: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| parse_lines(LATIN_BADWORDS_RAW));
