//! In-process implementation of every repository port.
//!
//! The server falls back to this store when no database URL is configured,
//! and HTTP tests use it to exercise handlers end to end. It mirrors the
//! PostgreSQL schema's constraints: unique usernames and emails, unique
//! follow pairs and likes, foreign keys and cascading deletes.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    FollowPersistenceError, FollowRepository, LikePersistenceError, LikeRepository,
    MessagePersistenceError, MessageRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    FollowEdge, Like, Message, MessageId, NewLike, NewMessage, NewUser, User, UserId,
};

#[derive(Debug)]
struct State {
    users: BTreeMap<UserId, User>,
    next_user_id: i32,
    messages: BTreeMap<MessageId, Message>,
    next_message_id: i32,
    /// Edges in insertion order.
    follows: Vec<FollowEdge>,
    /// Likes in insertion order.
    likes: Vec<Like>,
    next_like_id: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_user_id: 1,
            messages: BTreeMap::new(),
            next_message_id: 1,
            follows: Vec::new(),
            likes: Vec::new(),
            next_like_id: 1,
        }
    }
}

impl State {
    fn users_by_ids(&self, ids: impl Iterator<Item = UserId>) -> Vec<User> {
        ids.filter_map(|id| self.users.get(&id).cloned()).collect()
    }

    fn remove_messages_where(&mut self, predicate: impl Fn(&Message) -> bool) -> usize {
        let doomed: Vec<MessageId> = self
            .messages
            .values()
            .filter(|message| predicate(message))
            .map(|message| message.id)
            .collect();
        for id in &doomed {
            self.messages.remove(id);
        }
        self.likes.retain(|like| !doomed.contains(&like.message_id));
        doomed.len()
    }
}

/// Shared in-memory store; clones observe the same data.
///
/// # Examples
/// ```
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// use warbler::domain::ports::UserRepository;
/// use warbler::domain::{Email, NewUser, PasswordHash, Username};
/// use warbler::outbound::memory::InMemorySocialStore;
///
/// let store = InMemorySocialStore::default();
/// let user = store
///     .create(&NewUser::new(
///         Username::new("ada").unwrap(),
///         Email::new("ada@example.com").unwrap(),
///         PasswordHash::new("hash").unwrap(),
///     ))
///     .await
///     .unwrap();
/// assert_eq!(user.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySocialStore {
    state: Arc<Mutex<State>>,
}

impl InMemorySocialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Hand out the counter's value and advance it; `None` once `i32` is spent.
fn allocate(counter: &mut i32) -> Option<i32> {
    let id = *counter;
    *counter = counter.checked_add(1)?;
    Some(id)
}

fn count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

#[async_trait]
impl UserRepository for InMemorySocialStore {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.lock();
        if user.id.is_some_and(|id| state.users.contains_key(&id)) {
            return Err(UserPersistenceError::unique_violation("id"));
        }
        if state.users.values().any(|u| u.username() == &user.username) {
            return Err(UserPersistenceError::unique_violation("username"));
        }
        if state.users.values().any(|u| u.email() == &user.email) {
            return Err(UserPersistenceError::unique_violation("email"));
        }

        let id = match user.id {
            Some(id) => id,
            None => allocate(&mut state.next_user_id)
                .map(UserId::from_store)
                .filter(|id| !state.users.contains_key(id))
                .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?,
        };
        state.next_user_id = state.next_user_id.max(id.get().saturating_add(1));
        let created = user.clone().into_user(id);
        state.users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock().users.get(&id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()
            .users
            .values()
            .find(|user| user.username().as_ref() == username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock().users.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64, UserPersistenceError> {
        Ok(count(self.lock().users.len()))
    }

    async fn delete_all(&self) -> Result<u64, UserPersistenceError> {
        let mut state = self.lock();
        let removed = state.users.len();
        state.users.clear();
        state.messages.clear();
        state.follows.clear();
        state.likes.clear();
        Ok(count(removed))
    }
}

#[async_trait]
impl MessageRepository for InMemorySocialStore {
    async fn create(&self, message: &NewMessage) -> Result<Message, MessagePersistenceError> {
        let mut state = self.lock();
        if !state.users.contains_key(&message.user_id) {
            return Err(MessagePersistenceError::missing_author(
                message.user_id.get(),
            ));
        }
        let id = allocate(&mut state.next_message_id)
            .map(MessageId::from_store)
            .ok_or_else(|| MessagePersistenceError::query("message id sequence exhausted"))?;
        let created = Message {
            id,
            text: message.text.clone(),
            timestamp: Utc::now(),
            user_id: message.user_id,
        };
        state.messages.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, MessagePersistenceError> {
        Ok(self.lock().messages.get(&id).cloned())
    }

    async fn list_by_author(
        &self,
        author: UserId,
    ) -> Result<Vec<Message>, MessagePersistenceError> {
        Ok(self
            .lock()
            .messages
            .values()
            .filter(|message| message.user_id == author)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Message>, MessagePersistenceError> {
        Ok(self.lock().messages.values().cloned().collect())
    }

    async fn delete_all(&self) -> Result<u64, MessagePersistenceError> {
        Ok(count(self.lock().remove_messages_where(|_| true)))
    }
}

#[async_trait]
impl FollowRepository for InMemorySocialStore {
    async fn create(&self, edge: FollowEdge) -> Result<(), FollowPersistenceError> {
        let mut state = self.lock();
        if !state.users.contains_key(&edge.follower()) || !state.users.contains_key(&edge.followee())
        {
            return Err(FollowPersistenceError::missing_user());
        }
        if state.follows.contains(&edge) {
            return Err(FollowPersistenceError::duplicate_edge());
        }
        state.follows.push(edge);
        Ok(())
    }

    async fn delete(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut state = self.lock();
        let before = state.follows.len();
        state.follows.retain(|existing| existing != &edge);
        Ok(state.follows.len() != before)
    }

    async fn exists(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        Ok(self.lock().follows.contains(&edge))
    }

    async fn following(&self, user: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let state = self.lock();
        let ids = state
            .follows
            .iter()
            .filter(|edge| edge.followee() == user)
            .map(FollowEdge::follower);
        Ok(state.users_by_ids(ids))
    }

    async fn followers(&self, user: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let state = self.lock();
        let ids = state
            .follows
            .iter()
            .filter(|edge| edge.follower() == user)
            .map(FollowEdge::followee);
        Ok(state.users_by_ids(ids))
    }

    async fn delete_all(&self) -> Result<u64, FollowPersistenceError> {
        let mut state = self.lock();
        let removed = state.follows.len();
        state.follows.clear();
        Ok(count(removed))
    }
}

#[async_trait]
impl LikeRepository for InMemorySocialStore {
    async fn create(&self, like: NewLike) -> Result<Like, LikePersistenceError> {
        let mut state = self.lock();
        if !state.users.contains_key(&like.user_id)
            || !state.messages.contains_key(&like.message_id)
        {
            return Err(LikePersistenceError::missing_reference());
        }
        if state
            .likes
            .iter()
            .any(|l| l.user_id == like.user_id && l.message_id == like.message_id)
        {
            return Err(LikePersistenceError::duplicate_like());
        }
        let id = allocate(&mut state.next_like_id)
            .ok_or_else(|| LikePersistenceError::query("like id sequence exhausted"))?;
        let created = Like {
            id,
            user_id: like.user_id,
            message_id: like.message_id,
        };
        state.likes.push(created);
        Ok(created)
    }

    async fn delete(&self, user: UserId, message: MessageId) -> Result<bool, LikePersistenceError> {
        let mut state = self.lock();
        let before = state.likes.len();
        state
            .likes
            .retain(|like| !(like.user_id == user && like.message_id == message));
        Ok(state.likes.len() != before)
    }

    async fn find(
        &self,
        user: UserId,
        message: MessageId,
    ) -> Result<Option<Like>, LikePersistenceError> {
        Ok(self
            .lock()
            .likes
            .iter()
            .find(|like| like.user_id == user && like.message_id == message)
            .copied())
    }

    async fn likes_for_message(
        &self,
        message: MessageId,
    ) -> Result<Vec<Like>, LikePersistenceError> {
        Ok(self
            .lock()
            .likes
            .iter()
            .filter(|like| like.message_id == message)
            .copied()
            .collect())
    }

    async fn likers(&self, message: MessageId) -> Result<Vec<User>, LikePersistenceError> {
        let state = self.lock();
        let ids = state
            .likes
            .iter()
            .filter(|like| like.message_id == message)
            .map(|like| like.user_id);
        Ok(state.users_by_ids(ids))
    }

    async fn liked_messages(&self, user: UserId) -> Result<Vec<Message>, LikePersistenceError> {
        let state = self.lock();
        Ok(state
            .likes
            .iter()
            .filter(|like| like.user_id == user)
            .filter_map(|like| state.messages.get(&like.message_id).cloned())
            .collect())
    }

    async fn delete_all(&self) -> Result<u64, LikePersistenceError> {
        let mut state = self.lock();
        let removed = state.likes.len();
        state.likes.clear();
        Ok(count(removed))
    }
}

#[cfg(test)]
mod tests;
