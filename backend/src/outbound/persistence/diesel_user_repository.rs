//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Inserts run inside a transaction so a uniqueness violation on `username`
//! or `email` leaves the table untouched.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{
    Email, ImageUrl, NewUser, PasswordHash, User, UserId, UserValidationError, Username,
};

use super::diesel_basic_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

/// Name the user column behind a unique constraint.
fn unique_field(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("users_email_key") => "email",
        Some("users_username_key") => "username",
        Some("users_pkey") => "id",
        _ => "username or email",
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    if let Some(ConstraintViolation::Unique { constraint }) = constraint_violation(&error) {
        return UserPersistenceError::unique_violation(unique_field(constraint.as_deref()));
    }
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Convert a database row into a domain user, re-validating stored values.
pub(crate) fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let id = row.id;
    let invalid = |err: UserValidationError| {
        UserPersistenceError::query(format!("invalid stored user {id}: {err}"))
    };
    let username = Username::new(&row.username).map_err(invalid)?;
    let email = Email::new(&row.email).map_err(invalid)?;
    let image_url = ImageUrl::new(&row.image_url).map_err(invalid)?;
    let password_hash = PasswordHash::new(row.password.as_str()).map_err(invalid)?;
    Ok(User::new(
        UserId::from_store(id),
        username,
        email,
        image_url,
        password_hash,
    ))
}

pub(crate) fn rows_to_users(rows: Vec<UserRow>) -> Result<Vec<User>, UserPersistenceError> {
    rows.into_iter().map(row_to_user).collect()
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let explicit_id = user.id.map(UserId::get);
        let new_row = NewUserRow {
            id: explicit_id,
            email: user.email.as_ref(),
            username: user.username.as_ref(),
            image_url: user.image_url.as_ref(),
            password: user.password_hash.as_ref(),
        };

        let row = conn
            .transaction(|conn| {
                async move {
                    let row = diesel::insert_into(users::table)
                        .values(&new_row)
                        .returning(UserRow::as_returning())
                        .get_result::<UserRow>(conn)
                        .await?;

                    if explicit_id.is_some() {
                        // Keep the serial ahead of explicitly chosen ids.
                        diesel::sql_query(
                            "SELECT setval(pg_get_serial_sequence('users', 'id'), \
                             (SELECT MAX(id) FROM users))",
                        )
                        .execute(conn)
                        .await?;
                    }

                    Ok(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        row_to_user(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_user).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_users(rows)
    }

    async fn count(&self) -> Result<u64, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let total: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(total).map_err(|_| UserPersistenceError::query("negative user count"))
    }

    async fn delete_all(&self) -> Result<u64, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(users::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed as u64)
    }
}
