//! PostgreSQL-backed `FollowRepository` implementation using Diesel ORM.
//!
//! `following` and `followers` are joins from the `follows` edge table onto
//! `users`, ordered by edge id so results follow insertion order.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FollowPersistenceError, FollowRepository, UserPersistenceError};
use crate::domain::{FollowEdge, User, UserId};

use super::diesel_basic_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::diesel_user_repository::rows_to_users;
use super::models::{NewFollowRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{follows, users};

/// Diesel-backed implementation of the `FollowRepository` port.
#[derive(Clone)]
pub struct DieselFollowRepository {
    pool: DbPool,
}

impl DieselFollowRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FollowPersistenceError {
    map_basic_pool_error(error, FollowPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> FollowPersistenceError {
    match constraint_violation(&error) {
        Some(ConstraintViolation::Unique { .. }) => FollowPersistenceError::duplicate_edge(),
        Some(ConstraintViolation::ForeignKey) => FollowPersistenceError::missing_user(),
        _ => map_basic_diesel_error(
            error,
            FollowPersistenceError::query,
            FollowPersistenceError::connection,
        ),
    }
}

fn map_user_rows(rows: Vec<UserRow>) -> Result<Vec<User>, FollowPersistenceError> {
    rows_to_users(rows).map_err(|err| match err {
        UserPersistenceError::Connection { message } => FollowPersistenceError::connection(message),
        other => FollowPersistenceError::query(other.to_string()),
    })
}

#[async_trait]
impl FollowRepository for DieselFollowRepository {
    async fn create(&self, edge: FollowEdge) -> Result<(), FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(follows::table)
            .values(NewFollowRow {
                follower_id: edge.follower().get(),
                followee_id: edge.followee().get(),
            })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn delete(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(
            follows::table
                .filter(follows::follower_id.eq(edge.follower().get()))
                .filter(follows::followee_id.eq(edge.followee().get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn exists(&self, edge: FollowEdge) -> Result<bool, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            follows::table
                .filter(follows::follower_id.eq(edge.follower().get()))
                .filter(follows::followee_id.eq(edge.followee().get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn following(&self, user: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = follows::table
            .inner_join(users::table.on(users::id.eq(follows::follower_id)))
            .filter(follows::followee_id.eq(user.get()))
            .order(follows::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        map_user_rows(rows)
    }

    async fn followers(&self, user: UserId) -> Result<Vec<User>, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = follows::table
            .inner_join(users::table.on(users::id.eq(follows::followee_id)))
            .filter(follows::follower_id.eq(user.get()))
            .order(follows::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        map_user_rows(rows)
    }

    async fn delete_all(&self) -> Result<u64, FollowPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(follows::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }
}
