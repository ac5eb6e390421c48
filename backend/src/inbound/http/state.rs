//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, SignupService, SocialQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub signup: Arc<dyn SignupService>,
    pub login: Arc<dyn LoginService>,
    pub social: Arc<dyn SocialQuery>,
}

impl HttpState {
    /// Construct state from the account and social use-cases.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use warbler::domain::{AccountService, SocialService};
    /// use warbler::inbound::http::state::HttpState;
    /// use warbler::outbound::credentials::Argon2PasswordHasher;
    /// use warbler::outbound::memory::InMemorySocialStore;
    ///
    /// let store = Arc::new(InMemorySocialStore::new());
    /// let accounts = Arc::new(AccountService::new(
    ///     Arc::clone(&store),
    ///     Arc::new(Argon2PasswordHasher),
    /// ));
    /// let social = Arc::new(SocialService::new(
    ///     Arc::clone(&store),
    ///     Arc::clone(&store),
    ///     Arc::clone(&store),
    ///     store,
    /// ));
    /// let _state = HttpState::new(accounts.clone(), accounts, social);
    /// ```
    pub fn new(
        signup: Arc<dyn SignupService>,
        login: Arc<dyn LoginService>,
        social: Arc<dyn SocialQuery>,
    ) -> Self {
        Self {
            signup,
            login,
            social,
        }
    }
}
