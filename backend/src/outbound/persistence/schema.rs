//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Registered accounts.
    ///
    /// `email` and `username` carry unique constraints named
    /// `users_email_key` and `users_username_key`.
    users (id) {
        id -> Int4,
        email -> Text,
        username -> Text,
        /// Profile image location; defaults to the bundled avatar.
        image_url -> Text,
        /// Argon2 PHC string, never plaintext.
        password -> Text,
    }
}

diesel::table! {
    /// Short posts authored by users.
    messages (id) {
        id -> Int4,
        #[max_length = 140]
        text -> Varchar,
        timestamp -> Timestamptz,
        user_id -> Int4,
    }
}

diesel::table! {
    /// Directed follower → followee edges. `id` preserves insertion order.
    follows (id) {
        id -> Int4,
        follower_id -> Int4,
        followee_id -> Int4,
    }
}

diesel::table! {
    /// One row per (user, message) like.
    likes (id) {
        id -> Int4,
        user_id -> Int4,
        message_id -> Int4,
    }
}

diesel::joinable!(messages -> users (user_id));
diesel::joinable!(likes -> messages (message_id));

diesel::allow_tables_to_appear_in_same_query!(users, messages, follows, likes);
