//! The `PlaceOrder` workflow
//!
//! Types move through the stages in one direction:
//!
//! `UnvalidatedOrder` -> `ValidatedOrder` -> `PricedOrder` ->
//! `PricedOrderWithShippingMethod` -> `Vec<PlaceOrderEvent>`
//!
//! Capabilities (product check, address check, pricing, shipping cost,
//! letter rendering, sending) are passed in as functions; see [`place_order`].

mod acknowledgment;
mod errors;
mod events;
mod input;
mod place_order;
mod priced;
mod pricing;
mod shipping;
mod validated;
mod validation;

pub use acknowledgment::{HtmlString, OrderAcknowledgment, SendResult, acknowledge_order};
pub use errors::{PlaceOrderError, PricingError, RemoteServiceError, ServiceInfo, ValidationError};
pub use events::{
    BillableOrderPlaced, OrderAcknowledgmentSent, PlaceOrderEvent, ShippableOrderLine,
    ShippableOrderPlaced, create_billing_event, create_events, create_shipping_event,
    make_shipment_line,
};
pub use input::{UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine};
pub use place_order::place_order;
pub use priced::{
    PricedOrder, PricedOrderLine, PricedOrderProductLine, PricedOrderWithShippingMethod,
    ShippingInfo, ShippingMethod,
};
pub use pricing::{
    GetPricingFunction, GetProductPrice, TryGetProductPrice, add_comment_line,
    get_pricing_function, price_order, to_priced_order_line,
};
pub use shipping::{
    AddressCategory, add_shipping_info_to_order, calculate_shipping_cost,
    classify_shipping_address, free_vip_shipping,
};
pub use validated::{
    AddressValidationError, CheckedAddress, PricingMethod, ValidatedOrder, ValidatedOrderLine,
};
pub use validation::{
    create_pricing_method, to_address, to_checked_address, to_customer_info, to_order_id,
    to_order_line_id, to_order_quantity, to_product_code, to_validated_order_line,
    validate_order,
};
