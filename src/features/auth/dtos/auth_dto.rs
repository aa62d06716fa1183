use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[serde(alias = "identifier")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[serde(alias = "secret")]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
