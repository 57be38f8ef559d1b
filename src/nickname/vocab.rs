//! 기본 닉네임 어휘 (형용사 + 명사)
//!
//! 어휘는 전부 완성형 한글로만 구성됩니다. 생성기의 문자 검사
//! (한글 음절 + 숫자만 허용)가 이 전제 위에서 동작합니다.

use std::sync::LazyLock;

const ADJECTIVES_RAW: &str = include_str!("adjectives.txt");
const NOUNS_RAW: &str = include_str!("nouns.txt");

fn parse_lines(raw: &'static str) -> Vec<&'static str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// 기본 형용사 어휘
pub static DEFAULT_ADJECTIVES: LazyLock<Vec<&'static str>> =
    LazyLock::new(|| parse_lines(ADJECTIVES_RAW));

/// 기본 명사 어휘
pub static DEFAULT_NOUNS: LazyLock<Vec<&'static str>> = LazyLock::new(|| parse_lines(NOUNS_RAW));
