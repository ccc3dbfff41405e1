//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 생성/수정 시각은 엔티티 스스로 관리합니다.

use chrono::{Local, NaiveDateTime};

use super::role::Role;

/// 사용자 엔티티
///
/// 영속 계층이 관리하는 사용자 레코드입니다. `id`는 저장 전까지 `None`입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<i64>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub full_name: Option<String>,
    /// 사용자 이름 (unique)
    pub username: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    /// 사용자 역할
    pub role: Role,
    /// 생성 시간
    pub created_at: NaiveDateTime,
    /// 수정 시간
    pub updated_at: NaiveDateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 기본 역할(`Role::User`)로 시작하며 프로필 필드는 비어 있습니다.
    pub fn new(email: String, username: String, full_name: Option<String>) -> Self {
        let now = Local::now().naive_local();

        Self {
            id: None,
            email,
            full_name,
            username,
            bio: None,
            city: None,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장된 ID를 부여한 사본을 반환합니다.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// 저장된 상태인지 확인
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// 프로필 정보를 수정합니다.
    ///
    /// 전달된 값으로 네 필드를 모두 교체하고 `updated_at`을 갱신합니다.
    pub fn update_profile(
        &mut self,
        full_name: Option<String>,
        username: String,
        bio: Option<String>,
        city: Option<String>,
    ) {
        self.full_name = full_name;
        self.username = username;
        self.bio = bio;
        self.city = city;
        self.touch();
    }

    /// 역할 변경
    pub fn change_role(&mut self, role: Role) {
        self.role = role;
        self.touch();
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Local::now().naive_local();
    }
}
