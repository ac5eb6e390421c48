//! Port-level behaviour of the services over the in-memory store.

use rstest::{fixture, rstest};
use warbler::domain::ports::{
    LoginService, SignupService, SocialCommand, SocialQuery, UserRepository,
};
use warbler::domain::{
    Email, ErrorCode, LoginCredentials, MessageText, NewUser, PasswordHash, SignupRequest, User,
    UserId, Username,
};
use warbler::test_support::SocialWorld;

#[fixture]
fn world() -> SocialWorld {
    SocialWorld::in_memory()
}

async fn signup(world: &SocialWorld, username: &str, email: &str, password: &str) -> User {
    let request =
        SignupRequest::try_from_parts(username, email, password, None).expect("valid signup");
    world.signup.signup(&request).await.expect("signup succeeds")
}

#[rstest]
#[tokio::test]
async fn signup_login_round_trip(world: SocialWorld) {
    let user = signup(&world, "Kristina", "test1@gmail.com", "test1").await;

    let stored = world
        .users
        .find_by_username("Kristina")
        .await
        .expect("lookup")
        .expect("stored");
    assert_ne!(stored.password_hash().as_ref(), "test1");

    let ok = LoginCredentials::try_from_parts("Kristina", "test1").expect("creds");
    assert_eq!(world.login.authenticate(&ok).await.expect("auth"), Some(user));
    let wrong = LoginCredentials::try_from_parts("Kristina", "nope").expect("creds");
    assert_eq!(world.login.authenticate(&wrong).await.expect("auth"), None);
}

async fn user_with_id(world: &SocialWorld, id: i32, username: &str, email: &str) -> User {
    let user = NewUser::new(
        Username::new(username).expect("username"),
        Email::new(email).expect("email"),
        PasswordHash::new("HASHED_PASSWORD").expect("hash"),
    )
    .with_id(UserId::new(id).expect("id"));
    world.users.create(&user).await.expect("user created")
}

#[rstest]
#[tokio::test]
async fn follow_edge_lists_follower_in_followee_following(world: SocialWorld) {
    let u1 = user_with_id(&world, 5000, "testuser1", "test1@test.com").await;
    let u2 = user_with_id(&world, 5200, "testuser2", "test2@test.com").await;
    assert!(world.query.following(u1.id()).await.expect("following").is_empty());

    world.command.follow(u2.id(), u1.id()).await.expect("follow");

    let following = world.query.following(u1.id()).await.expect("following");
    let followers = world.query.followers(u2.id()).await.expect("followers");
    assert_eq!(
        format!("{following:?}"),
        "[<User #5200: testuser2, test2@test.com>]"
    );
    assert_eq!(
        format!("{followers:?}"),
        "[<User #5000: testuser1, test1@test.com>]"
    );
    assert!(world.query.is_following(u1.id(), u2.id()).await.expect("query"));
    assert!(world.query.is_followed_by(u2.id(), u1.id()).await.expect("query"));
    assert!(world.query.followers(u1.id()).await.expect("followers").is_empty());
}

#[rstest]
#[tokio::test]
async fn second_signup_with_same_username_conflicts(world: SocialWorld) {
    signup(&world, "Kristina", "test1@gmail.com", "test1").await;
    let request = SignupRequest::try_from_parts("Kristina", "test2@gmail.com", "test2", None)
        .expect("valid signup");

    let err = world.signup.signup(&request).await.expect_err("duplicate");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(world.users.count().await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn self_follow_and_self_like_are_rejected(world: SocialWorld) {
    let user = signup(&world, "solo", "solo@test.com", "pw").await;
    let message = world
        .command
        .post_message(user.id(), MessageText::new("me").expect("text"))
        .await
        .expect("posted");

    let follow = world
        .command
        .follow(user.id(), user.id())
        .await
        .expect_err("self follow");
    let like = world
        .command
        .like(user.id(), message.id)
        .await
        .expect_err("self like");

    assert_eq!(follow.code(), ErrorCode::InvalidRequest);
    assert_eq!(like.code(), ErrorCode::InvalidRequest);
    assert!(!world.query.is_following(user.id(), user.id()).await.expect("query"));
}

#[rstest]
#[tokio::test]
async fn toggling_a_like_twice_restores_state(world: SocialWorld) {
    let author = signup(&world, "author", "author@test.com", "pw").await;
    let fan = signup(&world, "fan", "fan@test.com", "pw").await;
    let message = world
        .command
        .post_message(author.id(), MessageText::new("toggle me").expect("text"))
        .await
        .expect("posted");

    assert!(world.command.toggle_like(fan.id(), message.id).await.expect("on"));
    assert_eq!(world.query.likes(message.id).await.expect("likes").len(), 1);
    assert!(!world.command.toggle_like(fan.id(), message.id).await.expect("off"));
    assert!(world.query.likers(message.id).await.expect("likers").is_empty());
}
