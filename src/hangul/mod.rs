//! 유니코드 한글 처리 모듈
//!
//! 완성형 음절 분류, 초성 분해, 초성열 추출을 담당합니다.

mod initials;
mod unicode;

pub use initials::extract_initials;
pub use unicode::{
    choseong_index, is_choseong_jamo, is_complete_hangul, is_consonant_jamo, is_vowel_jamo,
    CHOSEONG_TABLE,
};
