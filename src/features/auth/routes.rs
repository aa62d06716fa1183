use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/seed", get(handlers::seed_user))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::test_server;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_login_after_seed() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let seeded = server.get("/seed").await;
        seeded.assert_status(StatusCode::CREATED);
        assert_eq!(seeded.json::<Value>()["message"], "User seeded successfully");

        let response = server
            .post("/login")
            .json(&json!({ "username": "harshal", "password": "hp" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Login successful");
    }

    #[tokio::test]
    async fn test_login_accepts_identifier_and_secret() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);
        server.get("/seed").await.assert_status(StatusCode::CREATED);

        server
            .post("/login")
            .json(&json!({ "identifier": "harshal", "secret": "hp" }))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);
        server.get("/seed").await.assert_status(StatusCode::CREATED);

        for (username, password) in [("harshal", "wrong"), ("nobody", "hp")] {
            let response = server
                .post("/login")
                .json(&json!({ "username": username, "password": password }))
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let body: Value = response.json();
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Invalid username or password");
        }
    }

    #[tokio::test]
    async fn test_second_seed_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        server.get("/seed").await.assert_status(StatusCode::CREATED);
        server.get("/seed").await.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_blank_fields_fail_validation() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let response = server
            .post("/login")
            .json(&json!({ "username": "", "password": "hp" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], "Invalid request payload");
    }
}
