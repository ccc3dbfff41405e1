//! 사용자 역할 열거형

use std::fmt;

/// 사용자 역할
///
/// 닫힌 열거형이며, 응답 DTO에는 [`Role::as_str`]의 텍스트 이름으로 실립니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// 일반 사용자 (가입 시 기본값)
    #[default]
    User,
    /// 관리자
    Admin,
}

impl Role {
    /// 모든 역할 목록
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    /// 문자열에서 Role을 생성합니다.
    ///
    /// 대소문자를 구분하지 않습니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(Role::from_str("admin")?, Role::Admin);
    /// assert!(Role::from_str("owner").is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("Unsupported role: {}", s)),
        }
    }

    /// 역할의 열거자 이름을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
