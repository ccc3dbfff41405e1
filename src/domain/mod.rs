//! # Domain Layer Module
//!
//! 도메인 엔티티와, 엔티티를 API 계층으로 내보내는 DTO를 담는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 계층이 관리하는 내부 레코드 (User, Post, Comment)
//! └── dto       - 시스템 경계를 넘는 응답 스냅샷 (UserDto, PostDto, ...)
//! ```
//!
//! 엔티티 → DTO 변환은 항상 [`dto::projector`]의 함수 또는 `TryFrom` 구현을
//! 통해 이루어집니다.

pub mod dto;
pub mod entities;
