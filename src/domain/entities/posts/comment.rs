//! Comment Entity Implementation

use chrono::{Local, NaiveDateTime};

use crate::domain::entities::users::User;

/// 댓글 엔티티
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Option<i64>,
    pub post_id: i64,
    /// 작성자 ID
    pub user_id: i64,
    pub content: String,
    /// 로딩된 작성자 (`None`이면 미해석)
    pub user: Option<User>,
    pub created_at: NaiveDateTime,
}

impl Comment {
    pub fn new(post_id: i64, user_id: i64, content: String) -> Self {
        Self {
            id: None,
            post_id,
            user_id,
            content,
            user: None,
            created_at: Local::now().naive_local(),
        }
    }

    /// 저장된 ID를 부여한 사본을 반환합니다.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// 로딩된 작성자를 연결합니다.
    pub fn attach_user(&mut self, user: User) {
        self.user = Some(user);
    }
}
