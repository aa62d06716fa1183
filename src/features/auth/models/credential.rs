use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a login credential
#[derive(Debug, Clone, FromRow)]
pub struct Credential {
    pub id: Uuid,
    pub username: String,
    /// Argon2id PHC string
    pub password_hash: String,
}
