//! Posts Entity Module
//!
//! 게시물과 댓글 엔티티를 정의합니다.
//! 두 엔티티 모두 작성자를 `user_id`로 참조하며, 영속 계층이 작성자를
//! 로딩한 경우에만 `user` 필드가 채워집니다.

pub mod comment;
pub mod post;

pub use comment::Comment;
pub use post::Post;
