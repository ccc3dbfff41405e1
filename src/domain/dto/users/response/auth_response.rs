use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use super::user_response::UserDto;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 인증 결과 응답 DTO
///
/// 로그인/회원가입 결과를 담는 봉투입니다. 생성자를 통해 만들면
/// 실패 응답에는 토큰과 사용자가 실리지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
    pub token: Option<String>,
    pub user: Option<UserDto>,
}

impl AuthResponseDto {
    /// 로그인 성공 응답 생성
    pub fn authenticated(message: impl Into<String>, token: impl Into<String>, user: UserDto) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// 사용자 엔티티를 프로젝션하여 로그인 성공 응답을 생성합니다.
    pub fn authenticated_user(
        message: impl Into<String>,
        token: impl Into<String>,
        user: &User,
    ) -> AppResult<Self> {
        let user = UserDto::try_from(user)?;
        Ok(Self::authenticated(message, token, user))
    }

    /// 회원가입 성공 응답 생성 (토큰 없음)
    pub fn registered(message: impl Into<String>, user: UserDto) -> Self {
        Self {
            success: true,
            message: message.into(),
            token: None,
            user: Some(user),
        }
    }

    /// 실패 응답 생성
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            token: None,
            user: None,
        }
    }

    /// 토큰 또는 사용자가 실패 응답에 실려 있지 않은지 확인합니다.
    ///
    /// 필드를 직접 채워 만든 값을 검사할 때 사용합니다.
    pub fn is_consistent(&self) -> bool {
        self.success || (self.token.is_none() && self.user.is_none())
    }
}

impl Responder for AuthResponseDto {
    type Body = BoxBody;

    /// 성공은 200, 실패는 401로 응답합니다.
    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::UNAUTHORIZED
        };

        HttpResponse::build(status).json(self)
    }
}
