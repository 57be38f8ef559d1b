//! 초성 추출기
//!
//! 문자열의 각 한글 음절을 초성 자모로 투영한다.
//! 욕설 필터의 초성 축약 매칭(예: "ㅅㅂ")에 사용된다.

use super::unicode::{choseong_index, is_choseong_jamo, CHOSEONG_TABLE};

/// 문자열에서 초성열 추출
///
/// - 완성형 한글(가-힣): 초성 자모로 변환하여 추가
/// - 단독 초성 자모(ㄱ-ㅎ 중 초성 19개): 그대로 통과
/// - 그 외 문자(영문, 숫자, 공백, 기호, 모음 자모): 버림
///
/// 입력 순서를 보존하며, 빈 입력은 빈 출력이 된다.
pub fn extract_initials(text: &str) -> String {
    let mut initials = String::new();
    for ch in text.chars() {
        if let Some(index) = choseong_index(ch) {
            initials.push(CHOSEONG_TABLE[index]);
        } else if is_choseong_jamo(ch) {
            initials.push(ch);
        }
    }
    initials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllable() {
        assert_eq!(extract_initials("가"), "ㄱ");
        assert_eq!(extract_initials("한"), "ㅎ");
        assert_eq!(extract_initials("싸"), "ㅆ");
    }

    #[test]
    fn test_multi_syllable() {
        assert_eq!(extract_initials("테스트"), "ㅌㅅㅌ");
        assert_eq!(extract_initials("안녕하세요"), "ㅇㄴㅎㅅㅇ");
        assert_eq!(extract_initials("호랑이"), "ㅎㄹㅇ");
    }

    #[test]
    fn test_jamo_passthrough() {
        // 단독 초성 자모는 그대로 통과
        assert_eq!(extract_initials("ㅅㅂ"), "ㅅㅂ");
        assert_eq!(extract_initials("ㄱㄴㄷ"), "ㄱㄴㄷ");

        // 초성열 입력은 변하지 않음
        let initials = extract_initials("테스트");
        assert_eq!(extract_initials(&initials), initials);
    }

    #[test]
    fn test_other_chars_dropped() {
        // 영문/숫자/공백/기호는 버려짐
        assert_eq!(extract_initials("가a나1다!"), "ㄱㄴㄷ");
        assert_eq!(extract_initials("안녕 하세요"), "ㅇㄴㅎㅅㅇ");
        assert_eq!(extract_initials("hello123"), "");

        // 모음 자모도 버려짐
        assert_eq!(extract_initials("ㅏㅣ"), "");
    }

    #[test]
    fn test_mixed_syllable_and_jamo() {
        assert_eq!(extract_initials("가ㅅ나"), "ㄱㅅㄴ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(extract_initials(""), "");
    }
}
