//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 영속 계층이 관리하는 내부 레코드이며, 시스템 경계를 넘을 때는
//! 항상 [`crate::domain::dto`]의 응답 DTO로 프로젝션됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일
//! ├── users/
//! │   ├── role.rs     ← Role 열거형
//! │   └── user.rs     ← User 엔티티
//! └── posts/
//!     ├── post.rs     ← Post 엔티티
//!     └── comment.rs  ← Comment 엔티티
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! - **식별자**: `id`는 저장 전까지 `None`
//! - **시각 관리**: `created_at`은 생성 시 한 번, `updated_at`은 모든 수정 메서드에서 갱신
//! - **참조**: 작성자는 ID(`user_id`)로 참조하고, 로딩된 경우에만 `user`에 담김
//!
//! ## 주의사항
//!
//! - 엔티티를 그대로 응답으로 직렬화하지 않습니다. 반드시 DTO로 변환하세요.

pub mod posts;
pub mod users;
