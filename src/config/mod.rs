//! # Configuration Module
//!
//! 실행 환경과 로깅, JSON 출력 형식 설정을 담당하는 모듈입니다.
//! 모든 값은 환경 변수(또는 `.env` 파일)에서 읽어옵니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use social_spark_backend::config::{load_env_file, Environment, LogConfig};
//!
//! load_env_file();
//! LogConfig::init();
//!
//! let env = Environment::current();
//! log::info!("Current environment: {:?}", env);
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export PROFILE="dev"            # dev → .env.dev, prod → .env.prod
//! export ENVIRONMENT="development" # development, test, staging, production
//! export RUST_LOG="info"          # 기본값은 환경별로 결정
//! export PRETTY_JSON="true"       # DTO JSON 출력 들여쓰기
//! ```

pub mod data_config;

pub use data_config::*;
