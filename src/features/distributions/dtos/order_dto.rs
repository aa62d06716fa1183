use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::distributions::models::{
    Analysis, CreateDistributionOrder, DistributionOrder, DistributionStatus, GeoLocation,
    OrderDocument, ProductInfo, TimelineEvent,
};

/// Request DTO for placing a distribution order
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDistributionOrderDto {
    /// Unique order number; also names the directory holding the order's files
    #[validate(length(min = 1, message = "orderNumber is required"))]
    #[schema(example = "ORD-2025-001")]
    pub order_number: String,
    #[validate(length(min = 1, message = "trackingNumber is required"))]
    pub tracking_number: String,
    #[validate(length(min = 1, message = "customerName is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "shippingAddress is required"))]
    pub shipping_address: String,
    #[validate(length(min = 1, message = "contactPhone is required"))]
    pub contact_phone: String,
    #[validate(length(min = 1, message = "contactEmail is required"))]
    pub contact_email: String,
    /// Defaults to `Pending`
    pub status: Option<DistributionStatus>,
    /// Defaults to the time the order is placed
    pub order_date: Option<DateTime<Utc>>,
    #[validate(nested)]
    pub product_info: Option<ProductInfo>,
    #[validate(nested)]
    pub analysis: Option<Analysis>,
    #[serde(default)]
    #[validate(nested)]
    pub delivery_timeline: Vec<TimelineEvent>,
    #[serde(default)]
    #[validate(nested)]
    pub documents: Vec<OrderDocument>,
    #[validate(nested)]
    pub location: GeoLocation,
    pub signature: Option<String>,
}

impl CreateDistributionOrderDto {
    /// Apply defaults for everything the client left out
    pub fn into_create(self, now: DateTime<Utc>) -> CreateDistributionOrder {
        CreateDistributionOrder {
            order_number: self.order_number,
            tracking_number: self.tracking_number,
            customer_name: self.customer_name,
            shipping_address: self.shipping_address,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            status: self.status.unwrap_or_default(),
            order_date: self.order_date.unwrap_or(now),
            product_info: self.product_info,
            analysis: self.analysis,
            delivery_timeline: self.delivery_timeline,
            documents: self.documents,
            location: self.location,
            signature: self.signature,
        }
    }
}

/// Multipart form for `/distributionadd1`, for OpenAPI documentation only.
/// The handler reads the form with axum's Multipart extractor.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct PlaceOrderWithDocumentsDto {
    /// JSON-encoded `CreateDistributionOrderDto`
    pub order: String,
    /// Documents to attach; repeat the field for several files
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub files: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderResponseDto {
    pub order: DistributionOrder,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileListDto {
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::order_payload;

    #[test]
    fn test_defaults_applied() {
        let dto: CreateDistributionOrderDto =
            serde_json::from_value(order_payload("ORD-1")).unwrap();
        let now = Utc::now();

        let create = dto.into_create(now);
        assert_eq!(create.status, DistributionStatus::Pending);
        assert_eq!(create.order_date, now);
        assert!(create.delivery_timeline.iter().all(|e| !e.completed));
    }

    #[test]
    fn test_client_values_kept() {
        let mut payload = order_payload("ORD-1");
        payload["status"] = "In Transit".into();
        payload["orderDate"] = "2025-01-10T08:00:00Z".into();

        let dto: CreateDistributionOrderDto = serde_json::from_value(payload).unwrap();
        let create = dto.into_create(Utc::now());
        assert_eq!(create.status, DistributionStatus::InTransit);
        assert_eq!(create.order_date.to_rfc3339(), "2025-01-10T08:00:00+00:00");
    }

    #[test]
    fn test_missing_location_is_rejected_by_serde() {
        let mut payload = order_payload("ORD-1");
        payload.as_object_mut().unwrap().remove("location");
        assert!(serde_json::from_value::<CreateDistributionOrderDto>(payload).is_err());
    }

    #[test]
    fn test_validation_rules() {
        let valid: CreateDistributionOrderDto =
            serde_json::from_value(order_payload("ORD-1")).unwrap();
        assert!(valid.validate().is_ok());

        let mut free_form = valid.clone();
        free_form.order_number = "ORD 001/b".to_string();
        free_form.contact_email = "front desk".to_string();
        assert!(free_form.validate().is_ok());

        let mut missing_number = valid.clone();
        missing_number.order_number = String::new();
        assert!(missing_number.validate().is_err());

        let mut missing_email = valid.clone();
        missing_email.contact_email = String::new();
        assert!(missing_email.validate().is_err());

        let mut bad_location = valid.clone();
        bad_location.location.longitude = 181.0;
        assert!(bad_location.validate().is_err());

        let mut bad_dimensions = valid;
        if let Some(info) = bad_dimensions.product_info.as_mut() {
            info.dimensions.length = -1.0;
        }
        assert!(bad_dimensions.validate().is_err());
    }
}
