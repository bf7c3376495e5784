use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Profile default applied on first creation only.
pub const DEFAULT_LIFE_EXPECTANCY: i32 = 80;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub email: String,              // stored lowercase, unique
    #[serde(skip_serializing)]
    pub password_hash: String,      // argon2 hash, not exposed in JSON
    pub name: String,               // display name
    pub is_admin: bool,             // privilege flag
    pub onboarding_completed: bool, // set only at creation
    pub life_expectancy: i32,       // dashboard default, set only at creation
    pub created_at: OffsetDateTime, // creation timestamp
}

/// Full payload for inserting a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub is_admin: bool,
    pub onboarding_completed: bool,
    pub life_expectancy: i32,
}

/// Partial fields written when promoting an existing user.
/// Everything not listed here stays untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub password_hash: String,
    pub name: String,
    pub is_admin: bool,
}
