//! PostgreSQL-backed `MessageRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{MessagePersistenceError, MessageRepository};
use crate::domain::{Message, MessageId, MessageText, NewMessage, UserId};

use super::diesel_basic_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{MessageRow, NewMessageRow};
use super::pool::{DbPool, PoolError};
use super::schema::messages;

/// Diesel-backed implementation of the `MessageRepository` port.
#[derive(Clone)]
pub struct DieselMessageRepository {
    pool: DbPool,
}

impl DieselMessageRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MessagePersistenceError {
    map_basic_pool_error(error, MessagePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> MessagePersistenceError {
    map_basic_diesel_error(
        error,
        MessagePersistenceError::query,
        MessagePersistenceError::connection,
    )
}

pub(crate) fn row_to_message(row: MessageRow) -> Result<Message, MessagePersistenceError> {
    let text = MessageText::new(row.text).map_err(|err| {
        MessagePersistenceError::query(format!("invalid stored message {}: {err}", row.id))
    })?;
    Ok(Message {
        id: MessageId::from_store(row.id),
        text,
        timestamp: row.timestamp,
        user_id: UserId::from_store(row.user_id),
    })
}

pub(crate) fn rows_to_messages(
    rows: Vec<MessageRow>,
) -> Result<Vec<Message>, MessagePersistenceError> {
    rows.into_iter().map(row_to_message).collect()
}

#[async_trait]
impl MessageRepository for DieselMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewMessageRow {
            text: message.text.as_ref(),
            user_id: message.user_id.get(),
        };

        let row = diesel::insert_into(messages::table)
            .values(&new_row)
            .returning(MessageRow::as_returning())
            .get_result::<MessageRow>(&mut conn)
            .await
            .map_err(|err| match constraint_violation(&err) {
                Some(ConstraintViolation::ForeignKey) => {
                    MessagePersistenceError::missing_author(message.user_id.get())
                }
                _ => map_diesel_error(err),
            })?;
        row_to_message(row)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = messages::table
            .filter(messages::id.eq(id.get()))
            .select(MessageRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_message).transpose()
    }

    async fn list_by_author(
        &self,
        author: UserId,
    ) -> Result<Vec<Message>, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = messages::table
            .filter(messages::user_id.eq(author.get()))
            .order((messages::timestamp.asc(), messages::id.asc()))
            .select(MessageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_messages(rows)
    }

    async fn list_all(&self) -> Result<Vec<Message>, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = messages::table
            .order((messages::timestamp.asc(), messages::id.asc()))
            .select(MessageRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_messages(rows)
    }

    async fn delete_all(&self) -> Result<u64, MessagePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(messages::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }
}
