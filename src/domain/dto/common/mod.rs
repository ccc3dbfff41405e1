//! 공통 응답 봉투 및 JSON 출력 헬퍼

pub mod api_response;

pub use api_response::{to_json, ApiResponse};
