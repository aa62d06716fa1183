//! Fixtures shared by unit and HTTP tests.

use std::sync::Arc;

use axum::body::Bytes;
use axum_test::TestServer;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::core::config::AppConfig;
use crate::core::router::{self, AppServices};
use crate::features::auth::AuthService;
use crate::features::distributions::dtos::CreateDistributionOrderDto;
use crate::features::distributions::OrderService;
use crate::features::imports::ImportService;
use crate::features::uploads::UploadService;
use crate::modules::repository::{InMemoryRecordRepository, RecordRepository};
use crate::modules::storage::LocalDocumentStore;
use crate::shared::multipart::UploadedFile;

/// A complete, valid `/distributionadd` payload with randomized contact data
pub fn order_payload(order_number: &str) -> Value {
    let customer: String = CompanyName().fake();
    let street: String = StreetName().fake();
    let city: String = CityName().fake();
    let phone: String = PhoneNumber().fake();
    let email: String = SafeEmail().fake();

    json!({
        "orderNumber": order_number,
        "trackingNumber": format!("TRK-{}", order_number),
        "customerName": customer,
        "shippingAddress": format!("{}, {}", street, city),
        "contactPhone": phone,
        "contactEmail": email,
        "productInfo": {
            "description": "Paracetamol 500mg, 20 cartons",
            "quantity": 20,
            "unitWeight": "2.5 kg",
            "totalWeight": "50 kg",
            "dimensions": { "length": 40.0, "width": 30.0, "height": 25.0, "unit": "cm" }
        },
        "analysis": {
            "weightDistribution": "Even",
            "shippingClass": "Standard",
            "handlingRequirements": ["Keep dry", "Store below 25C"]
        },
        "deliveryTimeline": [
            { "event": "Order received", "date": "2025-01-10T08:00:00Z" }
        ],
        "location": { "latitude": 19.076, "longitude": 72.8777 }
    })
}

pub fn order_dto(order_number: &str) -> CreateDistributionOrderDto {
    serde_json::from_value(order_payload(order_number)).unwrap()
}

pub fn uploaded_file(file_name: &str, data: &[u8]) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        content_type: "application/pdf".to_string(),
        data: Bytes::copy_from_slice(data),
    }
}

/// Services over an in-memory repository and a document store rooted in `dir`
pub fn test_services(dir: &TempDir) -> AppServices {
    let repo: Arc<dyn RecordRepository> = Arc::new(InMemoryRecordRepository::new());
    let store = Arc::new(LocalDocumentStore::new(dir.path()));

    AppServices {
        auth: Arc::new(AuthService::new(Arc::clone(&repo))),
        imports: Arc::new(ImportService::new(Arc::clone(&repo))),
        orders: Arc::new(OrderService::new(Arc::clone(&repo), Arc::clone(&store))),
        uploads: Arc::new(UploadService::new(store).unwrap()),
    }
}

/// The full HTTP stack, layers included, over [`test_services`]
pub fn test_server(dir: &TempDir) -> TestServer {
    let config = AppConfig::default();
    let app = router::with_http_layers(router::api_routes(test_services(dir), &config), &config);
    TestServer::new(app).unwrap()
}
