//! 욕설 필터 모듈
//!
//! 정적 단어 목록과 3단계(리터럴/초성/영문) 내용 검사를 제공합니다.

mod profanity;
mod wordlist;

pub use profanity::contains_banned_word;
pub use wordlist::{KOREAN_BADWORDS, LATIN_BADWORDS};
