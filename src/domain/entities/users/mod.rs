//! Users Entity Module
//!
//! 사용자 도메인의 엔티티와 역할 열거형을 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use social_spark_backend::domain::entities::users::{Role, User};
//!
//! let mut user = User::new(
//!     "alice@example.com".to_string(),
//!     "alice123".to_string(),
//!     Some("Alice Johnson".to_string()),
//! )
//! .with_id(1);
//!
//! user.change_role(Role::Admin);
//! ```

pub mod role;
pub mod user;

pub use role::Role;
pub use user::User;
