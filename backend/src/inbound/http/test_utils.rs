//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::UserRepository;
use crate::domain::{
    AccountService, Email, NewUser, PasswordHash, SocialService, User, Username,
};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::outbound::credentials::Argon2PasswordHasher;
use crate::outbound::memory::InMemorySocialStore;

pub type MemorySocialService = SocialService<
    InMemorySocialStore,
    InMemorySocialStore,
    InMemorySocialStore,
    InMemorySocialStore,
>;

/// In-memory services wired the same way the server wires them.
pub struct TestWorld {
    pub store: Arc<InMemorySocialStore>,
    pub accounts: Arc<AccountService<InMemorySocialStore, Argon2PasswordHasher>>,
    pub social: Arc<MemorySocialService>,
}

impl TestWorld {
    pub fn new() -> Self {
        let store = Arc::new(InMemorySocialStore::new());
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&store),
            Arc::new(Argon2PasswordHasher),
        ));
        let social = Arc::new(SocialService::new(
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
        ));
        Self {
            store,
            accounts,
            social,
        }
    }

    pub fn state(&self) -> HttpState {
        HttpState::new(
            self.accounts.clone(),
            self.accounts.clone(),
            self.social.clone(),
        )
    }

    /// Build an app exposing every API route behind the trace middleware.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.state()))
            .wrap(Trace)
            .configure(configure)
    }
}

/// Insert a user directly with a placeholder hash; login will not succeed.
pub async fn seed_user(world: &TestWorld, name: &str) -> User {
    let new_user = NewUser::new(
        Username::new(name).expect("username"),
        Email::new(format!("{name}@test.com")).expect("email"),
        PasswordHash::new("HASHED_PASSWORD").expect("hash"),
    );
    UserRepository::create(world.store.as_ref(), &new_user)
        .await
        .expect("seed user")
}
