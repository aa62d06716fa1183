use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Shipment status enum matching database enum
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "distribution_status")]
pub enum DistributionStatus {
    #[default]
    Pending,
    Shipped,
    #[serde(rename = "In Transit")]
    #[sqlx(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    #[sqlx(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl std::fmt::Display for DistributionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionStatus::Pending => write!(f, "Pending"),
            DistributionStatus::Shipped => write!(f, "Shipped"),
            DistributionStatus::InTransit => write!(f, "In Transit"),
            DistributionStatus::OutForDelivery => write!(f, "Out for Delivery"),
            DistributionStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

/// Review state of a single order document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Approved,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Dimensions {
    #[validate(range(min = 0.0, message = "length must not be negative"))]
    pub length: f64,
    #[validate(range(min = 0.0, message = "width must not be negative"))]
    pub width: f64,
    #[validate(range(min = 0.0, message = "height must not be negative"))]
    pub height: f64,
    #[validate(length(min = 1, message = "dimensions.unit is required"))]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    #[validate(length(min = 1, message = "productInfo.description is required"))]
    pub description: String,
    pub quantity: u32,
    #[validate(length(min = 1, message = "productInfo.unitWeight is required"))]
    pub unit_weight: String,
    #[validate(length(min = 1, message = "productInfo.totalWeight is required"))]
    pub total_weight: String,
    #[validate(nested)]
    pub dimensions: Dimensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[validate(length(min = 1, message = "analysis.weightDistribution is required"))]
    pub weight_distribution: String,
    #[validate(length(min = 1, message = "analysis.shippingClass is required"))]
    pub shipping_class: String,
    #[serde(default)]
    pub handling_requirements: Vec<String>,
    pub special_instructions: Option<String>,
}

/// One entry of the delivery timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TimelineEvent {
    #[validate(length(min = 1, message = "deliveryTimeline.event is required"))]
    pub event: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderDocument {
    #[validate(length(min = 1, message = "documents.title is required"))]
    pub title: String,
    pub status: DocumentStatus,
}

impl OrderDocument {
    /// Document freshly derived from an uploaded file, awaiting review
    pub fn pending(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: DocumentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeoLocation {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within [-90, 90]"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within [-180, 180]"
    ))]
    pub longitude: f64,
}

/// A distribution order with all nested records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistributionOrder {
    pub id: Uuid,
    pub order_number: String,
    pub tracking_number: String,
    pub customer_name: String,
    pub shipping_address: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub status: DistributionStatus,
    pub order_date: DateTime<Utc>,
    pub product_info: Option<ProductInfo>,
    pub analysis: Option<Analysis>,
    pub delivery_timeline: Vec<TimelineEvent>,
    pub documents: Vec<OrderDocument>,
    pub location: GeoLocation,
    pub signature: Option<String>,
}

/// Data for creating a new distribution order, defaults already applied
#[derive(Debug, Clone)]
pub struct CreateDistributionOrder {
    pub order_number: String,
    pub tracking_number: String,
    pub customer_name: String,
    pub shipping_address: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub status: DistributionStatus,
    pub order_date: DateTime<Utc>,
    pub product_info: Option<ProductInfo>,
    pub analysis: Option<Analysis>,
    pub delivery_timeline: Vec<TimelineEvent>,
    pub documents: Vec<OrderDocument>,
    pub location: GeoLocation,
    pub signature: Option<String>,
}

impl CreateDistributionOrder {
    pub fn into_order(self, id: Uuid) -> DistributionOrder {
        DistributionOrder {
            id,
            order_number: self.order_number,
            tracking_number: self.tracking_number,
            customer_name: self.customer_name,
            shipping_address: self.shipping_address,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            status: self.status,
            order_date: self.order_date,
            product_info: self.product_info,
            analysis: self.analysis,
            delivery_timeline: self.delivery_timeline,
            documents: self.documents,
            location: self.location,
            signature: self.signature,
        }
    }
}

/// Partial mutation of an existing order; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateDistributionOrder {
    pub documents: Option<Vec<OrderDocument>>,
}

impl UpdateDistributionOrder {
    pub fn documents(documents: Vec<OrderDocument>) -> Self {
        Self {
            documents: Some(documents),
        }
    }

    pub fn apply(self, order: &mut DistributionOrder) {
        if let Some(documents) = self.documents {
            order.documents = documents;
        }
    }
}
