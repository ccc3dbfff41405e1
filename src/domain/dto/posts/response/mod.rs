//! # 게시물 관련 응답 DTO 모듈
//!
//! 게시물([`PostDto`])과 댓글([`CommentDto`]) 프로젝션을 정의합니다.
//! 두 DTO 모두 작성자를 [`UserDto`](crate::domain::dto::users::UserDto)로 중첩합니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": 1,
//!   "content": "Just finished an amazing hike in the mountains!",
//!   "imageUrl": null,
//!   "user": { /* UserDto 객체 */ },
//!   "likesCount": 42,
//!   "commentsCount": 8,
//!   "createdAt": "2024-06-01T10:00:00",
//!   "updatedAt": "2024-06-01T10:00:00"
//! }
//! ```

pub mod comment_response;
pub mod post_response;

pub use comment_response::CommentDto;
pub use post_response::PostDto;
