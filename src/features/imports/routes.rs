use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::imports::handlers;
use crate::features::imports::services::ImportService;

pub fn routes(service: Arc<ImportService>) -> Router {
    Router::new()
        .route("/import", get(handlers::list_imports))
        .route("/new_import", post(handlers::new_import))
        .route("/seed1", get(handlers::seed_imports))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use crate::features::imports::services::demo_import_records;
    use crate::shared::test_helpers::test_server;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_seed_then_list_imports() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let empty: Value = server.get("/import").await.json();
        assert_eq!(empty["data"], json!([]));

        let seeded = server.get("/seed1").await;
        seeded.assert_status(StatusCode::CREATED);
        assert_eq!(
            seeded.json::<Value>()["message"],
            "Demo drug data seeded successfully"
        );

        let response = server.get("/import").await;
        response.assert_status_ok();
        let body: Value = response.json();
        let records = body["data"].as_array().unwrap();
        assert_eq!(records.len(), 3);

        let mut order_nos: Vec<_> = records
            .iter()
            .map(|r| r["orderNo"].as_str().unwrap())
            .collect();
        order_nos.sort();
        assert_eq!(order_nos, vec!["ORD001", "ORD002", "ORD003"]);

        let ibuprofen = records.iter().find(|r| r["orderNo"] == "ORD002").unwrap();
        assert_eq!(ibuprofen["drugName"], "Ibuprofen");
        assert_eq!(ibuprofen["supplier"], "HealthCare Supplies");
        assert_eq!(ibuprofen["status"], "In Customs");
    }

    #[tokio::test]
    async fn test_new_import_echoes_without_storing() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);
        let payload = serde_json::to_value(&demo_import_records()[0]).unwrap();

        let response = server.post("/new_import").json(&payload).await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<Value>()["data"], payload);

        let list: Value = server.get("/import").await.json();
        assert_eq!(list["data"], json!([]));
    }

    #[tokio::test]
    async fn test_new_import_rejects_incomplete_payload() {
        let dir = tempfile::tempdir().unwrap();
        let server = test_server(&dir);

        let response = server
            .post("/new_import")
            .json(&json!({ "orderNo": "ORD009" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["success"], false);
    }
}
