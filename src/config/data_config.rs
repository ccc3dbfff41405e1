//! 실행 환경 및 로깅/직렬화 설정 관리 모듈
//!
//! 실행 환경, `.env` 프로파일 로딩, 로깅 필터, JSON 출력 형식을 관리합니다.

use std::env;

use env_logger::Env;
use log::{error, info};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그, 보기 좋은 JSON 출력
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Development {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발 또는 테스트 환경인지 확인
    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * 기타 / 미설정 - 기본 .env 파일 로드
pub fn load_env_file() {
    let profile = env::var("PROFILE").unwrap_or_default();

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv::dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 설정
pub struct LogConfig;

impl LogConfig {
    /// 현재 환경의 기본 로그 필터를 반환합니다.
    ///
    /// `RUST_LOG`가 설정되어 있으면 그 값이 우선합니다.
    pub fn default_filter() -> &'static str {
        Self::default_filter_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 기본 로그 필터를 반환합니다.
    ///
    /// - Development/Test: `debug`
    /// - Staging/Production: `info`
    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        if env.is_local() { "debug" } else { "info" }
    }

    /// `env_logger`를 초기화합니다.
    ///
    /// 이미 초기화된 경우 조용히 무시하므로 여러 번 호출해도 안전합니다.
    ///
    /// ```bash
    /// # 프로젝션 모듈만 debug
    /// RUST_LOG=social_spark_backend::domain::dto=debug
    /// ```
    pub fn init() {
        let _ = env_logger::try_init_from_env(Env::default().default_filter_or(Self::default_filter()));
    }
}

/// JSON 직렬화 출력 설정
pub struct SerializationConfig;

impl SerializationConfig {
    /// 보기 좋은(들여쓰기) JSON 출력 여부를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PRETTY_JSON`: `true`/`1` 또는 `false`/`0`
    ///
    /// 설정되지 않았거나 해석할 수 없는 경우 개발 환경에서만 `true`입니다.
    pub fn pretty_json() -> bool {
        let raw = env::var("PRETTY_JSON").ok();
        Self::pretty_json_for(raw.as_deref(), &Environment::current())
    }

    /// 주어진 `PRETTY_JSON` 값과 환경으로 출력 형식을 결정합니다.
    pub fn pretty_json_for(raw: Option<&str>, env: &Environment) -> bool {
        raw.and_then(Self::parse_flag)
            .unwrap_or(*env == Environment::Development)
    }

    fn parse_flag(raw: &str) -> Option<bool> {
        match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        }
    }
}
