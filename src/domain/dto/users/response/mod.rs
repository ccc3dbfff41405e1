//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 엔티티의 프로젝션([`UserDto`])과 인증 결과 봉투([`AuthResponseDto`])를
//! 정의합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, Responder};
//! use crate::domain::dto::users::response::{AuthResponseDto, UserDto};
//!
//! async fn login(req: web::Json<LoginRequest>) -> impl Responder {
//!     match auth.authenticate(&req).await {
//!         Ok((user, token)) => AuthResponseDto::authenticated_user("Login successful!", token, &user)
//!             .unwrap_or_else(|e| AuthResponseDto::failure(e.to_string())),
//!         Err(_) => AuthResponseDto::failure("Invalid credentials"),
//!     }
//! }
//! ```
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Login successful!",
//!   "token": "eyJhbGciOiJIUzI1NiIs...",
//!   "user": {
//!     "id": 1,
//!     "email": "alice@example.com",
//!     "fullName": "Alice Johnson",
//!     "username": "alice123",
//!     "bio": "Nature lover and adventure seeker.",
//!     "city": "San Francisco",
//!     "role": "USER",
//!     "createdAt": "2024-06-01T10:00:00",
//!     "updatedAt": "2024-06-07T12:00:00"
//!   }
//! }
//! ```
//!
//! ## 보안 고려사항
//!
//! - **비밀번호 제외**: 엔티티에도 DTO에도 비밀번호 해시는 없습니다
//! - **실패 응답**: `failure`로 만든 응답에는 토큰과 사용자가 실리지 않습니다

pub mod auth_response;
pub mod user_response;

pub use auth_response::AuthResponseDto;
pub use user_response::UserDto;
