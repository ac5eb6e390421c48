//! Constraint and relationship behaviour of the in-memory store.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{SocialCommand, SocialQuery};
use crate::domain::{Email, MessageText, PasswordHash, SocialService, Username};

#[fixture]
fn store() -> InMemorySocialStore {
    InMemorySocialStore::new()
}

fn new_user(name: &str) -> NewUser {
    NewUser::new(
        Username::new(name).expect("username"),
        Email::new(format!("{name}@test.com")).expect("email"),
        PasswordHash::new("HASHED_PASSWORD").expect("hash"),
    )
}

async fn add_user(store: &InMemorySocialStore, name: &str) -> User {
    UserRepository::create(store, &new_user(name))
        .await
        .expect("user created")
}

async fn add_message(store: &InMemorySocialStore, author: &User, text: &str) -> Message {
    MessageRepository::create(
        store,
        &NewMessage {
            user_id: author.id(),
            text: MessageText::new(text).expect("text"),
        },
    )
    .await
    .expect("message created")
}

fn edge(follower: &User, followee: &User) -> FollowEdge {
    FollowEdge::new(follower.id(), followee.id()).expect("distinct users")
}

#[rstest]
#[tokio::test]
async fn fresh_user_has_no_relationships(store: InMemorySocialStore) {
    let user = add_user(&store, "testuser").await;

    assert!(store.list_by_author(user.id()).await.expect("messages").is_empty());
    assert!(store.followers(user.id()).await.expect("followers").is_empty());
    assert!(store.following(user.id()).await.expect("following").is_empty());
}

#[rstest]
#[tokio::test]
async fn explicit_ids_are_kept_and_sequence_moves_past_them(store: InMemorySocialStore) {
    let explicit = UserRepository::create(
        &store,
        &new_user("testuser1").with_id(UserId::new(5000).expect("id")),
    )
    .await
    .expect("created");
    let assigned = add_user(&store, "testuser2").await;

    assert_eq!(explicit.to_string(), "<User #5000: testuser1, testuser1@test.com>");
    assert_eq!(assigned.id().get(), 5001);
}

#[rstest]
#[tokio::test]
async fn exhausted_sequence_never_overwrites_a_user(store: InMemorySocialStore) {
    let last = UserRepository::create(
        &store,
        &new_user("lastuser").with_id(UserId::new(i32::MAX).expect("id")),
    )
    .await
    .expect("created");

    let err = UserRepository::create(&store, &new_user("overflow"))
        .await
        .expect_err("no ids left");

    assert_eq!(err, UserPersistenceError::query("user id sequence exhausted"));
    assert_eq!(store.count().await.expect("count"), 1);
    assert_eq!(
        UserRepository::find_by_id(&store, last.id()).await.expect("lookup"),
        Some(last)
    );
}

#[rstest]
#[case("testuser", "other@test.com", "username")]
#[case("other", "testuser@test.com", "email")]
#[tokio::test]
async fn duplicate_username_or_email_is_rejected(
    store: InMemorySocialStore,
    #[case] username: &str,
    #[case] email: &str,
    #[case] field: &str,
) {
    add_user(&store, "testuser").await;
    let duplicate = NewUser::new(
        Username::new(username).expect("username"),
        Email::new(email).expect("email"),
        PasswordHash::new("hash").expect("hash"),
    );

    let err = UserRepository::create(&store, &duplicate)
        .await
        .expect_err("duplicate rejected");

    assert_eq!(err, UserPersistenceError::unique_violation(field));
    assert_eq!(store.count().await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn messages_keep_author_and_order(store: InMemorySocialStore) {
    let author = add_user(&store, "author").await;
    let first = add_message(&store, &author, "first").await;
    let second = add_message(&store, &author, "second").await;

    assert_eq!(first.user_id, author.id());
    let listed = store.list_by_author(author.id()).await.expect("messages");
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test]
async fn message_for_unknown_author_is_rejected(store: InMemorySocialStore) {
    let err = MessageRepository::create(
        &store,
        &NewMessage {
            user_id: UserId::new(42).expect("id"),
            text: MessageText::new("hi").expect("text"),
        },
    )
    .await
    .expect_err("no author");

    assert_eq!(err, MessagePersistenceError::missing_author(42));
}

#[rstest]
#[tokio::test]
async fn follow_edge_populates_both_views(store: InMemorySocialStore) {
    let a = add_user(&store, "usera").await;
    let b = add_user(&store, "userb").await;

    FollowRepository::create(&store, edge(&b, &a))
        .await
        .expect("edge created");

    assert_eq!(store.following(a.id()).await.expect("following"), vec![b.clone()]);
    assert_eq!(store.followers(b.id()).await.expect("followers"), vec![a.clone()]);
    assert!(store.following(b.id()).await.expect("following").is_empty());
    assert!(store.followers(a.id()).await.expect("followers").is_empty());
}

#[rstest]
#[tokio::test]
async fn duplicate_edges_and_unknown_users_are_rejected(store: InMemorySocialStore) {
    let a = add_user(&store, "usera").await;
    let b = add_user(&store, "userb").await;
    FollowRepository::create(&store, edge(&a, &b))
        .await
        .expect("edge created");

    assert_eq!(
        FollowRepository::create(&store, edge(&a, &b)).await,
        Err(FollowPersistenceError::duplicate_edge())
    );
    let ghost = FollowEdge::new(a.id(), UserId::new(99).expect("id")).expect("edge");
    assert_eq!(
        FollowRepository::create(&store, ghost).await,
        Err(FollowPersistenceError::missing_user())
    );
}

#[rstest]
#[tokio::test]
async fn likes_link_users_and_messages(store: InMemorySocialStore) {
    let author = add_user(&store, "author").await;
    let fan = add_user(&store, "fan").await;
    let message = add_message(&store, &author, "likeable").await;

    let like = LikeRepository::create(
        &store,
        NewLike {
            user_id: fan.id(),
            message_id: message.id,
        },
    )
    .await
    .expect("like created");

    assert_eq!(store.likers(message.id).await.expect("likers"), vec![fan.clone()]);
    assert_eq!(
        store.likes_for_message(message.id).await.expect("likes"),
        vec![like]
    );
    assert_eq!(
        store.liked_messages(fan.id()).await.expect("liked"),
        vec![message]
    );
}

#[rstest]
#[tokio::test]
async fn deleting_users_cascades(store: InMemorySocialStore) {
    let a = add_user(&store, "usera").await;
    let b = add_user(&store, "userb").await;
    let message = add_message(&store, &a, "hello").await;
    FollowRepository::create(&store, edge(&b, &a))
        .await
        .expect("edge");
    LikeRepository::create(
        &store,
        NewLike {
            user_id: b.id(),
            message_id: message.id,
        },
    )
    .await
    .expect("like");

    assert_eq!(UserRepository::delete_all(&store).await.expect("reset"), 2);
    assert!(MessageRepository::list_all(&store).await.expect("messages").is_empty());
    assert!(store.likers(message.id).await.expect("likers").is_empty());
}

#[rstest]
#[tokio::test]
async fn social_service_round_trip(store: InMemorySocialStore) {
    let shared = Arc::new(store);
    let service = SocialService::new(
        Arc::clone(&shared),
        Arc::clone(&shared),
        Arc::clone(&shared),
        Arc::clone(&shared),
    );
    let a = add_user(&shared, "usera").await;
    let b = add_user(&shared, "userb").await;

    service.follow(b.id(), a.id()).await.expect("follow");
    let post = service
        .post_message(a.id(), MessageText::new("hello").expect("text"))
        .await
        .expect("post");
    assert!(service.toggle_like(b.id(), post.id).await.expect("toggle on"));

    assert!(service.is_following(a.id(), b.id()).await.expect("query"));
    assert!(service.is_followed_by(b.id(), a.id()).await.expect("query"));
    assert!(!service.is_following(b.id(), a.id()).await.expect("query"));
    assert_eq!(service.likers(post.id).await.expect("likers"), vec![b.clone()]);

    assert!(!service.toggle_like(b.id(), post.id).await.expect("toggle off"));
    service.unfollow(b.id(), a.id()).await.expect("unfollow");
    assert!(service.following(a.id()).await.expect("following").is_empty());
}
