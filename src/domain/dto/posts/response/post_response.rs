use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::user_response::{project_owner, UserDto};
use crate::domain::entities::posts::Post;
use crate::errors::{AppError, AppResult};

/// 게시물 응답 DTO
///
/// 작성자는 ID가 아닌 [`UserDto`]로 중첩되어 실립니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub user: UserDto,
    pub likes_count: u32,
    pub comments_count: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<&Post> for PostDto {
    type Error = AppError;

    fn try_from(post: &Post) -> AppResult<Self> {
        let id = post
            .id
            .ok_or(AppError::IncompleteEntity { entity: "Post", field: "id" })?;
        let user = project_owner("Post", post.user_id, post.user.as_ref())?;

        Ok(Self {
            id,
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            user,
            likes_count: post.likes_count,
            comments_count: post.comments_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        })
    }
}
