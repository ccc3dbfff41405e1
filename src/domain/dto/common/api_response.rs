use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::config::SerializationConfig;
use crate::errors::AppResult;

/// API 응답 래퍼
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// 설정된 형식(`PRETTY_JSON`)으로 JSON 문자열을 만듭니다.
    pub fn to_json(&self) -> AppResult<String> {
        to_json(self)
    }
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };

        HttpResponse::build(status).json(self)
    }
}

/// 값을 JSON 문자열로 직렬화합니다.
///
/// [`SerializationConfig::pretty_json`]이 참이면 들여쓰기를 적용합니다.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let json = if SerializationConfig::pretty_json() {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(json)
}
