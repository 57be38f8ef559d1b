//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Byeolming 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ByeolmingConfig {
    /// 생성 닉네임에 숫자 접미사(10~999)를 붙일지 여부
    #[serde(default = "default_use_number_suffix")]
    pub use_number_suffix: bool,
    /// 닉네임 생성 최대 재시도 횟수
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_use_number_suffix() -> bool {
    true
}

fn default_max_retries() -> u32 {
    10
}

impl Default for ByeolmingConfig {
    fn default() -> Self {
        Self {
            use_number_suffix: default_use_number_suffix(),
            max_retries: default_max_retries(),
        }
    }
}

/// 설정 파일 경로: ~/.config/byeolming/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("byeolming").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> ByeolmingConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|_| ByeolmingConfig::default()),
        Err(_) => ByeolmingConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &ByeolmingConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
