//! Regression coverage for user value types and representation.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn user() -> User {
    User::new(
        UserId::new(5000).expect("valid id"),
        Username::new("testuser1").expect("valid username"),
        Email::new("test1@test.com").expect("valid email"),
        ImageUrl::default(),
        PasswordHash::new("HASHED_PASSWORD").expect("valid hash"),
    )
}

#[rstest]
fn display_matches_repr_contract(user: User) {
    assert_eq!(user.to_string(), "<User #5000: testuser1, test1@test.com>");
    assert_eq!(format!("{user:?}"), "<User #5000: testuser1, test1@test.com>");
}

#[rstest]
fn list_renders_as_sequence(user: User) {
    let other = NewUser::new(
        Username::new("testuser2").expect("valid username"),
        Email::new("test2@test.com").expect("valid email"),
        PasswordHash::new("HASHED_PASSWORD").expect("valid hash"),
    )
    .into_user(UserId::new(5200).expect("valid id"));
    let users = vec![user, other];

    let expected = "[<User #5000: testuser1, test1@test.com>, <User #5200: testuser2, test2@test.com>]";
    assert_eq!(format!("{users:?}"), expected);
    assert_eq!(UserList(&users).to_string(), expected);
    assert_eq!(UserList(&[]).to_string(), "[]");
}

#[rstest]
fn debug_never_prints_password_hash(user: User) {
    let rendered = format!("{:?}", user.password_hash());
    assert!(!rendered.contains("HASHED_PASSWORD"));
}

#[rstest]
#[case(0)]
#[case(-7)]
fn user_id_rejects_non_positive(#[case] raw: i32) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::NonPositiveId));
}

#[rstest]
#[case("", UserValidationError::EmptyUsername)]
#[case("   ", UserValidationError::EmptyUsername)]
#[case("two words", UserValidationError::UsernameContainsWhitespace)]
#[case(
    "a_username_that_is_far_too_long_to_fit",
    UserValidationError::UsernameTooLong { max: USERNAME_MAX }
)]
fn username_validation(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  Kristina ").expect("valid username");
    assert_eq!(username.as_ref(), "Kristina");
}

#[rstest]
#[case("", UserValidationError::EmptyEmail)]
#[case("not-an-email", UserValidationError::InvalidEmail)]
#[case("missing@", UserValidationError::InvalidEmail)]
fn email_validation(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Email::new(raw), Err(expected));
}

#[rstest]
#[case(None, DEFAULT_IMAGE_URL)]
#[case(Some("   "), DEFAULT_IMAGE_URL)]
#[case(Some("https://example.com/swallow.jpg"), "https://example.com/swallow.jpg")]
fn image_url_falls_back_to_default(#[case] raw: Option<&str>, #[case] expected: &str) {
    assert_eq!(ImageUrl::or_default(raw).as_ref(), expected);
}

#[rstest]
fn new_user_builder_keeps_requested_id() {
    let record = NewUser::new(
        Username::new("testuser").expect("valid username"),
        Email::new("test@test.com").expect("valid email"),
        PasswordHash::new("HASHED_PASSWORD").expect("valid hash"),
    )
    .with_id(UserId::new(6000).expect("valid id"));

    assert_eq!(record.id.map(UserId::get), Some(6000));
    assert_eq!(record.image_url.as_ref(), DEFAULT_IMAGE_URL);
}
