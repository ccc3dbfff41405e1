//! 에러 타입 모듈
//!
//! [`AppError`]와 [`AppResult`]를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult};
