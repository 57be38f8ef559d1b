//! 랜덤 닉네임 생성기
//!
//! 형용사 + 명사 (+ 숫자 접미사) 조합을 랜덤으로 뽑아
//! 구조/내용 검사와 레지스트리 중복 검사를 통과한 첫 후보를
//! 반환합니다. 재시도 횟수가 소진되면 None.

use std::fmt;
use std::sync::Arc;

use rand::RngExt;

use crate::filter::contains_banned_word;
use crate::hangul::is_complete_hangul;

use super::registry::NicknameRegistry;
use super::vocab::{DEFAULT_ADJECTIVES, DEFAULT_NOUNS};

/// 숫자 접미사 최솟값
const SUFFIX_MIN: u32 = 10;
/// 숫자 접미사 최댓값
const SUFFIX_MAX: u32 = 999;

/// 생성기 구성 에러
///
/// 어휘가 비어 있으면 생성 자체가 불가능하므로 구성 시점에 실패시킨다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    /// 형용사 어휘가 비어 있음
    EmptyAdjectives,
    /// 명사 어휘가 비어 있음
    EmptyNouns,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::EmptyAdjectives => write!(f, "형용사 어휘가 비어 있습니다"),
            GeneratorError::EmptyNouns => write!(f, "명사 어휘가 비어 있습니다"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// 생성된 닉네임에 허용되는 문자인지 확인
///
/// 한글 음절과 숫자만 허용. 어휘가 전부 한글이므로 검증기의
/// `is_allowed_user_char`보다 의도적으로 좁은 규칙이다
/// (생성 닉네임에는 영문/자모 불허).
fn is_generated_char(ch: char) -> bool {
    is_complete_hangul(ch) || ch.is_ascii_digit()
}

/// 후보가 생성 닉네임의 구조 규칙을 만족하는지 확인
fn is_generated_form(candidate: &str) -> bool {
    // 공백 포함 시 거부
    if candidate.chars().any(char::is_whitespace) {
        return false;
    }
    candidate.chars().all(is_generated_char)
}

/// 랜덤 닉네임 생성기
///
/// 어휘와 레지스트리 핸들을 보유하며, 생성 호출마다 레지스트리를
/// 통해 프로세스 전역 유일성을 보장합니다.
#[derive(Debug)]
pub struct NicknameGenerator {
    adjectives: Vec<String>,
    nouns: Vec<String>,
    registry: Arc<NicknameRegistry>,
}

impl NicknameGenerator {
    /// 어휘를 지정하여 생성기 생성
    ///
    /// 어느 한쪽 어휘라도 비어 있으면 에러
    pub fn new(
        adjectives: Vec<String>,
        nouns: Vec<String>,
        registry: Arc<NicknameRegistry>,
    ) -> Result<Self, GeneratorError> {
        if adjectives.is_empty() {
            return Err(GeneratorError::EmptyAdjectives);
        }
        if nouns.is_empty() {
            return Err(GeneratorError::EmptyNouns);
        }
        Ok(Self {
            adjectives,
            nouns,
            registry,
        })
    }

    /// 기본 어휘로 생성기 생성
    pub fn with_default_vocab(registry: Arc<NicknameRegistry>) -> Self {
        // 기본 어휘는 빌드 시점에 포함되며 비어 있지 않음
        Self {
            adjectives: DEFAULT_ADJECTIVES.iter().map(|w| w.to_string()).collect(),
            nouns: DEFAULT_NOUNS.iter().map(|w| w.to_string()).collect(),
            registry,
        }
    }

    /// 레지스트리 핸들 반환
    pub fn registry(&self) -> &Arc<NicknameRegistry> {
        &self.registry
    }

    /// 닉네임 생성
    ///
    /// 최대 `max_retries`회 시도하며, 유일하고 유효한 후보를 찾지
    /// 못하면 None (소진). `max_retries == 0`이면 항상 None.
    pub fn generate(&self, use_number_suffix: bool, max_retries: u32) -> Option<String> {
        self.generate_with_rng(&mut rand::rng(), use_number_suffix, max_retries)
    }

    /// 주입된 난수 생성기로 닉네임 생성
    ///
    /// 시드 고정 테스트용. 동작은 `generate`와 동일.
    pub fn generate_with_rng<R: RngExt>(
        &self,
        rng: &mut R,
        use_number_suffix: bool,
        max_retries: u32,
    ) -> Option<String> {
        for _ in 0..max_retries {
            let adjective = &self.adjectives[rng.random_range(0..self.adjectives.len())];
            let noun = &self.nouns[rng.random_range(0..self.nouns.len())];

            let candidate = if use_number_suffix {
                let number = rng.random_range(SUFFIX_MIN..=SUFFIX_MAX);
                format!("{}{}{}", adjective, noun, number)
            } else {
                format!("{}{}", adjective, noun)
            };

            // 구조 검사 (한글 음절 + 숫자만)
            if !is_generated_form(&candidate) {
                continue;
            }

            // 내용 검사
            if contains_banned_word(&candidate) {
                continue;
            }

            // 유일성 검사 + 선점 (하나의 임계 구역)
            if self.registry.try_claim(&candidate) {
                return Some(candidate);
            }
        }

        log::debug!("닉네임 생성 재시도 {}회 소진", max_retries);
        None
    }
}
