//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 엔티티 프로젝션과 응답 렌더링을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use social_spark_backend::errors::{AppError, AppResult};
//!
//! fn require_id(user: &User) -> AppResult<i64> {
//!     user.id.ok_or(AppError::IncompleteEntity { entity: "User", field: "id" })
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 서버 내부 데이터 문제이므로 500으로 응답됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 소스 엔티티에 필수 필드가 없음 (500 Internal Server Error)
    #[error("Incomplete entity: {entity}.{field} is missing")]
    IncompleteEntity {
        entity: &'static str,
        field: &'static str,
    },

    /// 중첩 참조를 해석할 수 없음 (500 Internal Server Error)
    #[error("Unresolved reference: {entity}.{reference}")]
    UnresolvedReference {
        entity: &'static str,
        reference: String,
    },

    /// JSON 직렬화 에러 (500 Internal Server Error)
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl AppError {
    /// 프로젝션 단계에서 발생한 에러인지 확인
    pub fn is_projection_error(&self) -> bool {
        matches!(
            self,
            AppError::IncompleteEntity { .. } | AppError::UnresolvedReference { .. }
        )
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
