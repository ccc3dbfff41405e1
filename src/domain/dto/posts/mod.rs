//! 게시물 도메인 DTO 모듈

pub mod response;

pub use response::{CommentDto, PostDto};
