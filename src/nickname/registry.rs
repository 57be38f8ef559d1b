//! 사용된 닉네임 레지스트리
//!
//! 프로세스 수명 동안 발급된 닉네임을 추적하는 추가 전용 집합입니다.
//! 영속화 없이 메모리에만 존재하며 재시작 시 초기화됩니다.

use std::collections::HashSet;
use std::sync::Mutex;

/// 발급된 닉네임 집합
///
/// 생성기에 주입되는 명시적 핸들로, "이미 발급됨" 판정의 유일한
/// 기준입니다. 성공적으로 생성된 닉네임만 추가되며 제거는 없습니다.
#[derive(Debug, Default)]
pub struct NicknameRegistry {
    used: Mutex<HashSet<String>>,
}

impl NicknameRegistry {
    /// 빈 레지스트리 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 닉네임이 이미 발급되었는지 확인
    pub fn contains(&self, nickname: &str) -> bool {
        self.used.lock().unwrap().contains(nickname)
    }

    /// 닉네임 선점 시도
    ///
    /// 검사와 삽입을 한 번의 잠금 안에서 수행하므로 동시 생성 호출이
    /// 같은 닉네임을 중복 발급할 수 없다. 처음 선점하면 true,
    /// 이미 발급된 닉네임이면 false.
    pub fn try_claim(&self, nickname: &str) -> bool {
        self.used.lock().unwrap().insert(nickname.to_string())
    }

    /// 발급된 닉네임 수
    pub fn len(&self) -> usize {
        self.used.lock().unwrap().len()
    }

    /// 발급된 닉네임이 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.used.lock().unwrap().is_empty()
    }
}
