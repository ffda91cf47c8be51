//! Wire types of the HTTP API and their conversions to and from the domain
//!
//! - [`input`]: `OrderFormDto`, the request body
//! - [`output`]: `PlaceOrderEventDto`, the success body
//! - [`error`]: `PlaceOrderErrorDto`, the failure body

pub mod error;
pub mod input;
pub mod output;

pub use error::PlaceOrderErrorDto;
pub use input::{AddressDto, CustomerInfoDto, OrderFormDto, OrderFormLineDto};
pub use output::{
    BillableOrderPlacedDto, OrderAcknowledgmentSentDto, PdfAttachmentDto, PlaceOrderEventDto,
    ShippableOrderLineDto, ShippableOrderPlacedDto, ShippingInfoDto,
};
