use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,                   // unique user ID
    pub email: String,              // stored lowercased, unique
    #[serde(skip_serializing)]
    pub password_hash: String,      // bcrypt hash, not exposed in JSON
    pub name: Option<String>,       // optional display name
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
