//! Test utilities for the warbler crate.
//!
//! Compiled with the `test-support` feature so integration tests under
//! `tests/` can wire the domain services over any set of repositories.

use std::sync::Arc;

use crate::domain::ports::{
    FollowRepository, LikeRepository, LoginService, MessageRepository, SignupService,
    SocialCommand, SocialQuery, UserRepository,
};
use crate::domain::{AccountService, SocialService};
use crate::outbound::credentials::Argon2PasswordHasher;
use crate::outbound::memory::InMemorySocialStore;

/// Account and social use-cases behind their port traits.
#[derive(Clone)]
pub struct SocialWorld {
    pub users: Arc<dyn UserRepository>,
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub query: Arc<dyn SocialQuery>,
    pub command: Arc<dyn SocialCommand>,
}

impl SocialWorld {
    /// Wire the services over the given repositories with Argon2 hashing.
    pub fn new<U, M, F, L>(users: Arc<U>, messages: Arc<M>, follows: Arc<F>, likes: Arc<L>) -> Self
    where
        U: UserRepository + 'static,
        M: MessageRepository + 'static,
        F: FollowRepository + 'static,
        L: LikeRepository + 'static,
    {
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&users),
            Arc::new(Argon2PasswordHasher),
        ));
        let social = Arc::new(SocialService::new(
            Arc::clone(&users),
            messages,
            follows,
            likes,
        ));
        Self {
            users,
            signup: accounts.clone(),
            login: accounts,
            query: social.clone(),
            command: social,
        }
    }

    /// Services over a fresh [`InMemorySocialStore`].
    ///
    /// # Examples
    /// ```
    /// use warbler::test_support::SocialWorld;
    ///
    /// let world = SocialWorld::in_memory();
    /// let _signup = world.signup.clone();
    /// ```
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemorySocialStore::new());
        Self::new(
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
            store,
        )
    }
}
