//! # Entity Projector
//!
//! 도메인 엔티티를 경계를 넘는 응답 DTO로 변환하는 순수 함수들입니다.
//!
//! - 입력 엔티티를 수정하지 않습니다
//! - 같은 엔티티를 두 번 프로젝션하면 필드가 같은 독립된 DTO가 만들어집니다
//! - 필수 필드가 없거나 작성자가 로딩되지 않은 경우 즉시 실패합니다
//!
//! ```rust,ignore
//! use social_spark_backend::domain::dto::projector::{project_post, project_user};
//!
//! let user_dto = project_user(&user)?;
//! let post_dto = project_post(&post)?;
//! assert_eq!(post_dto.user, user_dto);
//! ```

use log::{debug, warn};

use super::posts::{CommentDto, PostDto};
use super::users::UserDto;
use crate::domain::entities::posts::{Comment, Post};
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 사용자 엔티티를 [`UserDto`]로 프로젝션합니다.
pub fn project_user(user: &User) -> AppResult<UserDto> {
    let dto = UserDto::try_from(user)
        .inspect_err(|e| warn!("사용자 프로젝션 실패 ({}): {}", user.username, e))?;
    debug!("사용자 프로젝션 완료: id={}", dto.id);
    Ok(dto)
}

/// 게시물 엔티티를 [`PostDto`]로 프로젝션합니다.
///
/// 작성자는 [`project_user`]와 같은 규칙으로 중첩 프로젝션됩니다.
pub fn project_post(post: &Post) -> AppResult<PostDto> {
    let dto = PostDto::try_from(post)
        .inspect_err(|e| warn!("게시물 프로젝션 실패 (user_id={}): {}", post.user_id, e))?;
    debug!("게시물 프로젝션 완료: id={}, user_id={}", dto.id, dto.user.id);
    Ok(dto)
}

/// 게시물 목록(피드)을 순서대로 프로젝션합니다.
///
/// 하나라도 실패하면 전체가 실패합니다.
pub fn project_posts(posts: &[Post]) -> AppResult<Vec<PostDto>> {
    let dtos = posts
        .iter()
        .map(PostDto::try_from)
        .collect::<AppResult<Vec<_>>>()
        .inspect_err(|e| warn!("피드 프로젝션 실패 (총 {}건): {}", posts.len(), e))?;

    debug!("피드 프로젝션 완료: {}건", dtos.len());
    Ok(dtos)
}

pub fn project_comment(comment: &Comment) -> AppResult<CommentDto> {
    let dto = CommentDto::try_from(comment)
        .inspect_err(|e| warn!("댓글 프로젝션 실패 (post_id={}): {}", comment.post_id, e))?;
    debug!("댓글 프로젝션 완료: id={}, post_id={}", dto.id, dto.post_id);
    Ok(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;
    use crate::errors::AppError;

    fn user(id: i64, username: &str) -> User {
        User::new(format!("{}@example.com", username), username.to_string(), None).with_id(id)
    }

    fn post(id: i64, author: &User, content: &str) -> Post {
        Post::authored_by(author.clone(), content.to_string(), None).with_id(id)
    }

    #[test]
    fn test_example_user_projection() {
        let mut alice = user(1, "alice");
        alice.email = "a@x.com".to_string();
        alice.role = Role::Admin;

        let dto = project_user(&alice).unwrap();

        assert_eq!(dto.id, 1);
        assert_eq!(dto.email, "a@x.com");
        assert_eq!(dto.username, "alice");
        assert_eq!(dto.role, "ADMIN");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let alice = user(1, "alice");

        let first = project_user(&alice).unwrap();
        let second = project_user(&alice).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_projection_does_not_mutate_input() {
        let alice = user(1, "alice");
        let before = alice.clone();

        project_user(&alice).unwrap();

        assert_eq!(alice, before);
    }

    #[test]
    fn test_later_mutation_does_not_propagate() {
        let mut alice = user(1, "alice");
        let dto = project_user(&alice).unwrap();

        alice.update_profile(
            Some("Alice J.".to_string()),
            "alice_j".to_string(),
            Some("new bio".to_string()),
            Some("Berlin".to_string()),
        );
        alice.change_role(Role::Admin);

        assert_eq!(dto.username, "alice");
        assert!(dto.full_name.is_none());
        assert!(dto.city.is_none());
        assert_eq!(dto.role, "USER");
    }

    #[test]
    fn test_post_projection_is_idempotent() {
        let bob = user(2, "bob");
        let p = post(5, &bob, "painting");

        let first = project_post(&p).unwrap();
        let second = project_post(&p).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_post_later_edit_does_not_propagate() {
        let bob = user(2, "bob");
        let mut p = post(5, &bob, "painting");
        let dto = project_post(&p).unwrap();
        let snapshot = dto.clone();

        p.edit("repainted".to_string(), Some("https://images.example.com/new.jpg".to_string()));
        p.likes_count += 1;

        assert_eq!(dto, snapshot);
        assert_eq!(dto.content, "painting");
        assert!(dto.image_url.is_none());
        assert_eq!(dto.likes_count, 0);
        assert_ne!(project_post(&p).unwrap(), dto);
    }

    #[test]
    fn test_post_owner_matches_user_projection() {
        let bob = user(2, "bob");
        let p = post(5, &bob, "painting");

        let dto = project_post(&p).unwrap();

        assert_eq!(dto.user, project_user(&bob).unwrap());
    }

    #[test]
    fn test_feed_preserves_order() {
        let alice = user(1, "alice");
        let bob = user(2, "bob");
        let feed = vec![post(3, &bob, "third"), post(1, &alice, "first"), post(2, &bob, "second")];

        let dtos = project_posts(&feed).unwrap();

        let ids: Vec<i64> = dtos.iter().map(|dto| dto.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(dtos[1].user.username, "alice");
    }

    #[test]
    fn test_feed_fails_as_a_whole() {
        let alice = user(1, "alice");
        let orphan = Post::new(9, "orphan".to_string(), None).with_id(2);
        let feed = vec![post(1, &alice, "ok"), orphan];

        let err = project_posts(&feed).unwrap_err();

        assert!(err.is_projection_error());
        assert!(matches!(err, AppError::UnresolvedReference { entity: "Post", .. }));
    }

    #[test]
    fn test_empty_feed() {
        assert!(project_posts(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_comment_projection() {
        let carol = user(3, "carol");
        let mut comment = Comment::new(1, 3, "Wow".to_string()).with_id(1);
        comment.attach_user(carol.clone());

        let dto = project_comment(&comment).unwrap();

        assert_eq!(dto.user, project_user(&carol).unwrap());
    }
}
