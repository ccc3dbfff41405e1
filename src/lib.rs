//! 소셜 스파크 백엔드 프로젝션 계층
//!
//! 사용자/게시물 엔티티를 API 응답용 DTO로 변환하는 라이브러리입니다.
//! 영속성, 라우팅, 인증 로직은 포함하지 않으며, 외부 HTTP 계층은
//! 이 크레이트의 DTO를 그대로 actix-web 응답으로 반환할 수 있습니다.
//!
//! # Features
//!
//! - **엔티티**: `User`, `Post`, `Comment`와 `Role` 열거형
//! - **프로젝션**: 엔티티 → `UserDto`/`PostDto`/`CommentDto` 순수 변환
//! - **인증 응답**: `AuthResponseDto` 봉투와 일관성 있는 생성자
//! - **응답 렌더링**: `ApiResponse`, `AuthResponseDto`의 `Responder` 구현
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  HTTP Handlers  │ ← (외부) actix-web 핸들러
//! └─────────────────┘
//!          │  Responder
//!          ▼
//! ┌─────────────────┐
//! │      DTOs       │ ← UserDto / PostDto / AuthResponseDto
//! └─────────────────┘
//!          │  project_*
//!          ▼
//! ┌─────────────────┐
//! │    Entities     │ ← User / Post / Comment
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use social_spark_backend::config::LogConfig;
//! use social_spark_backend::domain::dto::{project_posts, ApiResponse};
//!
//! LogConfig::init();
//!
//! let feed = project_posts(&posts)?;
//! let response = ApiResponse::success(feed);
//! ```

pub mod config;
pub mod domain;
pub mod errors;
