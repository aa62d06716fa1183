use std::sync::Arc;
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::auth::password::{hash_password, verify_password};
use crate::modules::repository::RecordRepository;

pub const DEMO_USERNAME: &str = "harshal";
pub const DEMO_PASSWORD: &str = "hp";

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Service for verifying login credentials
pub struct AuthService {
    repo: Arc<dyn RecordRepository>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Verify a username/password pair.
    ///
    /// Unknown users and wrong passwords produce the same error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        let credential = match self.repo.find_credential(username).await {
            Ok(credential) => credential,
            Err(AppError::NotFound(_)) => {
                warn!("Login rejected: unknown username={}", username);
                return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
            }
            Err(e) => return Err(e),
        };

        // Argon2 is CPU-bound; keep it off the async workers
        let password = password.to_string();
        let hash = credential.password_hash;
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;

        if !matches {
            warn!("Login rejected: wrong password for username={}", username);
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        info!(
            "Login successful: username={}, id={}",
            username, credential.id
        );
        Ok(())
    }

    /// Hash and store a new credential; `Conflict` when the username exists
    pub async fn create_credential(&self, username: &str, password: &str) -> Result<()> {
        let password = password.to_string();
        let hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;

        self.repo.insert_credential(username, &hash).await?;
        Ok(())
    }

    /// Create the demo dashboard user
    pub async fn seed_demo_credential(&self) -> Result<()> {
        self.create_credential(DEMO_USERNAME, DEMO_PASSWORD).await?;
        info!("Demo user seeded: username={}", DEMO_USERNAME);
        Ok(())
    }
}
