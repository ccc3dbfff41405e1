use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::user_response::{project_owner, UserDto};
use crate::domain::entities::posts::Comment;
use crate::errors::{AppError, AppResult};

/// 댓글 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub user: UserDto,
    pub created_at: NaiveDateTime,
}

impl TryFrom<&Comment> for CommentDto {
    type Error = AppError;

    fn try_from(comment: &Comment) -> AppResult<Self> {
        let id = comment
            .id
            .ok_or(AppError::IncompleteEntity { entity: "Comment", field: "id" })?;
        let user = project_owner("Comment", comment.user_id, comment.user.as_ref())?;

        Ok(Self {
            id,
            post_id: comment.post_id,
            content: comment.content.clone(),
            user,
            created_at: comment.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::User;

    #[test]
    fn test_comment_embeds_author() {
        let carol = User::new("carol@example.com".to_string(), "carol_fit".to_string(), None).with_id(3);
        let mut comment = Comment::new(1, 3, "I need to go hiking more often.".to_string()).with_id(2);
        comment.attach_user(carol.clone());

        let dto = CommentDto::try_from(&comment).unwrap();

        assert_eq!(dto.id, 2);
        assert_eq!(dto.post_id, 1);
        assert_eq!(dto.user, UserDto::try_from(&carol).unwrap());

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["postId"], 1);
    }

    #[test]
    fn test_comment_without_author_fails() {
        let comment = Comment::new(1, 3, "?".to_string()).with_id(5);

        assert!(matches!(
            CommentDto::try_from(&comment),
            Err(AppError::UnresolvedReference { entity: "Comment", .. })
        ));
    }
}
