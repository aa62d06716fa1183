mod distribution_order;

pub use distribution_order::{
    Analysis, CreateDistributionOrder, Dimensions, DistributionOrder, DistributionStatus,
    DocumentStatus, GeoLocation, OrderDocument, ProductInfo, TimelineEvent,
    UpdateDistributionOrder,
};
