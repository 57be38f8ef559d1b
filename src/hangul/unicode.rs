//! 유니코드 한글 문자 분류/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
pub const CHOSEONG_COUNT: usize = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자모 초성 테이블 (초성 인덱스 0~18 순서)
///
/// 완성형 음절에서 분해한 초성 인덱스를 표시 가능한 자모 문자로
/// 변환할 때 사용한다.
#[rustfmt::skip]
pub const CHOSEONG_TABLE: [char; CHOSEONG_COUNT] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(ch: char) -> bool {
    let cp = ch as u32;
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&cp)
}

/// 문자가 호환용 자음 자모(ㄱ-ㅎ)인지 확인
///
/// 호환용 자음 영역: U+3131 ~ U+314E (복합 자음 ㄳ, ㄵ 등 포함)
pub fn is_consonant_jamo(ch: char) -> bool {
    let cp = ch as u32;
    (0x3131..=0x314E).contains(&cp)
}

/// 문자가 호환용 모음 자모(ㅏ-ㅣ)인지 확인
///
/// 호환용 모음 영역: U+314F ~ U+3163
pub fn is_vowel_jamo(ch: char) -> bool {
    let cp = ch as u32;
    (0x314F..=0x3163).contains(&cp)
}

/// 문자가 초성으로 쓰일 수 있는 19개 자모 중 하나인지 확인
///
/// 복합 자음(ㄳ, ㄺ 등)은 초성이 될 수 없으므로 제외
pub fn is_choseong_jamo(ch: char) -> bool {
    CHOSEONG_TABLE.contains(&ch)
}

/// 완성형 한글의 초성 인덱스 분해
///
/// 한글 음절이 아니면 None
pub fn choseong_index(ch: char) -> Option<usize> {
    let code = ch as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    Some((offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT)) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete_hangul() {
        assert!(is_complete_hangul('가'));
        assert!(is_complete_hangul('힣'));
        assert!(is_complete_hangul('안'));

        assert!(!is_complete_hangul('ㄱ'));
        assert!(!is_complete_hangul('ㅏ'));
        assert!(!is_complete_hangul('a'));
        assert!(!is_complete_hangul('1'));
    }

    #[test]
    fn test_is_consonant_jamo() {
        assert!(is_consonant_jamo('ㄱ'));
        assert!(is_consonant_jamo('ㅎ'));
        assert!(is_consonant_jamo('ㄳ')); // 복합 자음도 자음 영역
        assert!(!is_consonant_jamo('ㅏ'));
        assert!(!is_consonant_jamo('가'));
    }

    #[test]
    fn test_is_vowel_jamo() {
        assert!(is_vowel_jamo('ㅏ'));
        assert!(is_vowel_jamo('ㅣ'));
        assert!(is_vowel_jamo('ㅢ'));
        assert!(!is_vowel_jamo('ㄱ'));
        assert!(!is_vowel_jamo('가'));
    }

    #[test]
    fn test_is_choseong_jamo() {
        assert!(is_choseong_jamo('ㄱ'));
        assert!(is_choseong_jamo('ㅆ'));
        assert!(is_choseong_jamo('ㅎ'));

        // 복합 자음은 초성 불가
        assert!(!is_choseong_jamo('ㄳ'));
        assert!(!is_choseong_jamo('ㄺ'));
        // 모음도 불가
        assert!(!is_choseong_jamo('ㅏ'));
    }

    #[test]
    fn test_choseong_index() {
        // 가 = 초성 ㄱ(0)
        assert_eq!(choseong_index('가'), Some(0));
        // 한 = 초성 ㅎ(18)
        assert_eq!(choseong_index('한'), Some(18));
        // 싸 = 초성 ㅆ(10)
        assert_eq!(choseong_index('싸'), Some(10));

        // 한글 음절이 아닌 문자
        assert_eq!(choseong_index('a'), None);
        assert_eq!(choseong_index('1'), None);
        assert_eq!(choseong_index('ㄱ'), None);
    }

    #[test]
    fn test_choseong_table_order() {
        // 초성 인덱스와 테이블 순서가 일치해야 함
        assert_eq!(CHOSEONG_TABLE[choseong_index('가').unwrap()], 'ㄱ');
        assert_eq!(CHOSEONG_TABLE[choseong_index('나').unwrap()], 'ㄴ');
        assert_eq!(CHOSEONG_TABLE[choseong_index('하').unwrap()], 'ㅎ');
    }
}
