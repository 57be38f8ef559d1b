pub mod config;
pub mod filter;
pub mod hangul;
pub mod nickname;

pub use filter::contains_banned_word;
pub use hangul::extract_initials;
pub use nickname::{
    validate_user_nickname, GeneratorError, NicknameGenerator, NicknameRegistry, RejectReason,
    ValidationResult,
};
