//! # Data Transfer Objects Module
//!
//! 시스템 경계를 넘는 응답 DTO와 엔티티 프로젝션 함수를 정의합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! dto/
//! ├── projector.rs     ← project_user / project_post / project_posts / project_comment
//! ├── common/          ← ApiResponse 봉투, JSON 출력 헬퍼
//! ├── users/response/  ← UserDto, AuthResponseDto
//! └── posts/response/  ← PostDto, CommentDto
//! ```
//!
//! ## 변환 규칙
//!
//! | 엔티티 필드 | DTO 필드 |
//! |-------------|----------|
//! | 스칼라 필드 | 그대로 복사 |
//! | `role: Role` | `role: String` (열거자 이름) |
//! | `user: Option<User>` | `user: UserDto` (중첩 프로젝션, 없으면 실패) |
//! | `id: Option<i64>` | `id: i64` (없으면 실패) |
//!
//! JSON 필드 이름은 camelCase, 시각은 ISO-8601 로컬 시각 문자열입니다.

pub mod common;
pub mod posts;
pub mod projector;
pub mod users;

pub use common::ApiResponse;
pub use posts::{CommentDto, PostDto};
pub use projector::{project_comment, project_post, project_posts, project_user};
pub use users::{AuthResponseDto, UserDto};
