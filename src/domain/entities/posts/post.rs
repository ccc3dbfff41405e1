//! Post Entity Implementation

use chrono::{Local, NaiveDateTime};

use crate::domain::entities::users::User;

/// 게시물 엔티티
///
/// `user`는 영속 계층이 로딩한 작성자 엔티티입니다.
/// `None`이면 작성자 참조(`user_id`)가 아직 해석되지 않은 상태입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Option<i64>,
    /// 작성자 ID
    pub user_id: i64,
    /// 본문
    pub content: String,
    /// 첨부 이미지 URL
    pub image_url: Option<String>,
    pub likes_count: u32,
    pub comments_count: u32,
    /// 로딩된 작성자
    pub user: Option<User>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Post {
    /// 새 게시물 생성 (카운터는 0에서 시작)
    pub fn new(user_id: i64, content: String, image_url: Option<String>) -> Self {
        let now = Local::now().naive_local();

        Self {
            id: None,
            user_id,
            content,
            image_url,
            likes_count: 0,
            comments_count: 0,
            user: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 작성자 엔티티를 직접 받아 게시물을 생성합니다.
    ///
    /// 작성자가 아직 저장되지 않은 경우 `user_id`는 0으로 둡니다.
    pub fn authored_by(user: User, content: String, image_url: Option<String>) -> Self {
        let mut post = Self::new(user.id.unwrap_or_default(), content, image_url);
        post.user = Some(user);
        post
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

    /// 작성자가 로딩되었는지 확인
    pub fn is_user_resolved(&self) -> bool {
        self.user.is_some()
    }

    /// 본문과 이미지를 수정하고 `updated_at`을 갱신합니다.
    pub fn edit(&mut self, content: String, image_url: Option<String>) {
        self.content = content;
        self.image_url = image_url;
        self.updated_at = Local::now().naive_local();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_post_starts_with_zero_counters() {
        let post = Post::new(1, "hello".to_string(), None);

        assert_eq!(post.likes_count, 0);
        assert_eq!(post.comments_count, 0);
        assert!(!post.is_user_resolved());
        assert!(post.image_url.is_none());
    }

    #[test]
    fn test_authored_by_links_owner() {
        let user = User::new("alice@example.com".to_string(), "alice123".to_string(), None).with_id(1);
        let post = Post::authored_by(user, "hike".to_string(), None);

        assert_eq!(post.user_id, 1);
        assert!(post.is_user_resolved());
    }

    #[test]
    fn test_edit_refreshes_updated_at() {
        let past = NaiveDate::from_ymd_opt(2021, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let mut post = Post::new(1, "draft".to_string(), None);
        post.created_at = past;
        post.updated_at = past;

        post.edit("final".to_string(), Some("https://img.example.com/1.jpg".to_string()));

        assert_eq!(post.content, "final");
        assert_eq!(post.created_at, past);
        assert!(post.updated_at > past);
    }
}
