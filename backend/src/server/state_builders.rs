//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use tracing::warn;
use warbler::domain::ports::{
    FollowRepository, LikeRepository, MessageRepository, UserRepository,
};
use warbler::domain::{AccountService, SocialService};
use warbler::inbound::http::state::HttpState;
use warbler::outbound::credentials::Argon2PasswordHasher;
use warbler::outbound::memory::InMemorySocialStore;
use warbler::outbound::persistence::{
    DbPool, DieselFollowRepository, DieselLikeRepository, DieselMessageRepository,
    DieselUserRepository,
};

use super::ServerConfig;

fn wire<U, M, F, L>(users: Arc<U>, messages: Arc<M>, follows: Arc<F>, likes: Arc<L>) -> HttpState
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
    let social = Arc::new(SocialService::new(users, messages, follows, likes));
    HttpState::new(accounts.clone(), accounts, social)
}

fn diesel_state(pool: &DbPool) -> HttpState {
    wire(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselMessageRepository::new(pool.clone())),
        Arc::new(DieselFollowRepository::new(pool.clone())),
        Arc::new(DieselLikeRepository::new(pool.clone())),
    )
}

fn memory_state() -> HttpState {
    let store = Arc::new(InMemorySocialStore::new());
    wire(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::clone(&store),
        store,
    )
}

/// Use Diesel repositories when a pool is configured, otherwise a
/// process-local in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => {
            warn!("no database configured; using the in-memory store");
            memory_state()
        }
    }
}
