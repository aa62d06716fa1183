pub mod order_dto;

pub use order_dto::{
    CreateDistributionOrderDto, FileListDto, PlaceOrderResponseDto, PlaceOrderWithDocumentsDto,
};
