//! PostgreSQL-backed `LikeRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LikePersistenceError, LikeRepository};
use crate::domain::{Like, Message, MessageId, NewLike, User, UserId};

use super::diesel_basic_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::diesel_message_repository::rows_to_messages;
use super::diesel_user_repository::rows_to_users;
use super::models::{LikeRow, MessageRow, NewLikeRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{likes, messages, users};

/// Diesel-backed implementation of the `LikeRepository` port.
#[derive(Clone)]
pub struct DieselLikeRepository {
    pool: DbPool,
}

impl DieselLikeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LikePersistenceError {
    map_basic_pool_error(error, LikePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> LikePersistenceError {
    match constraint_violation(&error) {
        Some(ConstraintViolation::Unique { .. }) => LikePersistenceError::duplicate_like(),
        Some(ConstraintViolation::ForeignKey) => LikePersistenceError::missing_reference(),
        _ => map_basic_diesel_error(
            error,
            LikePersistenceError::query,
            LikePersistenceError::connection,
        ),
    }
}

fn row_to_like(row: LikeRow) -> Like {
    Like {
        id: row.id,
        user_id: UserId::from_store(row.user_id),
        message_id: MessageId::from_store(row.message_id),
    }
}

#[async_trait]
impl LikeRepository for DieselLikeRepository {
    async fn create(&self, like: NewLike) -> Result<Like, LikePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(likes::table)
            .values(NewLikeRow {
                user_id: like.user_id.get(),
                message_id: like.message_id.get(),
            })
            .returning(LikeRow::as_returning())
            .get_result::<LikeRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_to_like(row))
    }

    async fn delete(&self, user: UserId, message: MessageId) -> Result<bool, LikePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(
            likes::table
                .filter(likes::user_id.eq(user.get()))
                .filter(likes::message_id.eq(message.get())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }

    async fn find(
        &self,
        user: UserId,
        message: MessageId,
    ) -> Result<Option<Like>, LikePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = likes::table
            .filter(likes::user_id.eq(user.get()))
            .filter(likes::message_id.eq(message.get()))
            .select(LikeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_like))
    }

    async fn likes_for_message(
        &self,
        message: MessageId,
    ) -> Result<Vec<Like>, LikePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = likes::table
            .filter(likes::message_id.eq(message.get()))
            .order(likes::id.asc())
            .select(LikeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_like).collect())
    }

    async fn likers(&self, message: MessageId) -> Result<Vec<User>, LikePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = likes::table
            .inner_join(users::table.on(users::id.eq(likes::user_id)))
            .filter(likes::message_id.eq(message.get()))
            .order(likes::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_users(rows).map_err(|err| LikePersistenceError::query(err.to_string()))
    }

    async fn liked_messages(&self, user: UserId) -> Result<Vec<Message>, LikePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = likes::table
            .inner_join(messages::table)
            .filter(likes::user_id.eq(user.get()))
            .order(likes::id.asc())
            .select(MessageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_messages(rows).map_err(|err| LikePersistenceError::query(err.to_string()))
    }

    async fn delete_all(&self) -> Result<u64, LikePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(likes::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }
}
