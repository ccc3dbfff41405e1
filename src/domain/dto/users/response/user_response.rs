use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

/// 사용자 응답 DTO
///
/// [`User`] 엔티티의 스냅샷입니다. 엔티티를 참조하지 않으므로
/// 생성 이후 엔티티가 수정되어도 영향을 받지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub username: String,
    pub bio: Option<String>,
    pub city: Option<String>,

    /// 역할의 열거자 이름 (`"USER"`, `"ADMIN"`)
    pub role: String,

    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<&User> for UserDto {
    type Error = AppError;

    fn try_from(user: &User) -> AppResult<Self> {
        let id = user
            .id
            .ok_or(AppError::IncompleteEntity { entity: "User", field: "id" })?;

        Ok(Self {
            id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            username: user.username.clone(),
            bio: user.bio.clone(),
            city: user.city.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

/// 게시물/댓글의 작성자를 프로젝션합니다.
///
/// 작성자가 로딩되지 않았거나, 로딩된 작성자의 ID가 `user_id`와 다르면
/// `UnresolvedReference`로 실패합니다.
pub(crate) fn project_owner(entity: &'static str, user_id: i64, owner: Option<&User>) -> AppResult<UserDto> {
    let owner = owner.ok_or_else(|| AppError::UnresolvedReference {
        entity,
        reference: format!("user({})", user_id),
    })?;

    let dto = UserDto::try_from(owner)?;

    if dto.id != user_id {
        return Err(AppError::UnresolvedReference {
            entity,
            reference: format!("user({}) resolved to user({})", user_id, dto.id),
        });
    }

    Ok(dto)
}
