//! Byeolming - 한국어 닉네임 생성/검증 CLI

use std::process;
use std::sync::Arc;

use byeolming::config::load_config;
use byeolming::hangul::extract_initials;
use byeolming::nickname::{validate_user_nickname, NicknameGenerator, NicknameRegistry};

fn print_usage() {
    eprintln!("사용법:");
    eprintln!("  byeolming generate [개수]     랜덤 닉네임 생성 (기본 1개)");
    eprintln!("  byeolming validate <닉네임>   닉네임 유효성 검사");
    eprintln!("  byeolming initials <문자열>   초성 추출");
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("generate") => {
            let count: usize = match args.get(1) {
                Some(raw) => match raw.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("잘못된 개수: {}", raw);
                        process::exit(2);
                    }
                },
                None => 1,
            };

            let config = load_config();
            let registry = Arc::new(NicknameRegistry::new());
            let generator = NicknameGenerator::with_default_vocab(registry);

            for _ in 0..count {
                match generator.generate(config.use_number_suffix, config.max_retries) {
                    Some(nickname) => println!("{}", nickname),
                    None => {
                        // 소진은 호출자가 구분해서 처리해야 하는 상태
                        log::warn!("재시도 {}회 안에 닉네임을 만들지 못함", config.max_retries);
                        eprintln!("닉네임 생성 실패 (재시도 소진)");
                        process::exit(1);
                    }
                }
            }
        }
        Some("validate") => {
            let Some(candidate) = args.get(1) else {
                print_usage();
                process::exit(2);
            };

            let result = validate_user_nickname(candidate);
            if result.is_valid {
                println!("유효한 닉네임입니다");
            } else if let Some(reason) = result.reason {
                println!("유효하지 않은 닉네임: {}", reason);
                process::exit(1);
            }
        }
        Some("initials") => {
            let Some(text) = args.get(1) else {
                print_usage();
                process::exit(2);
            };
            println!("{}", extract_initials(text));
        }
        _ => {
            print_usage();
            process::exit(2);
        }
    }
}
