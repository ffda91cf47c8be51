//! Default host capabilities
//!
//! Stand-ins for the external product catalog, address verification and
//! mail services.

use futures::future::{self, BoxFuture, FutureExt};

use crate::simple_types::ProductCode;
use crate::workflow::{
    AddressValidationError, CheckedAddress, HtmlString, OrderAcknowledgment,
    PricedOrderWithShippingMethod, SendResult, UnvalidatedAddress,
};

/// Every well-formed product code exists
#[must_use]
pub const fn check_product_exists(_product_code: &ProductCode) -> bool {
    true
}

/// Accepts every address
pub fn check_address_exists(
    address: UnvalidatedAddress,
) -> BoxFuture<'static, Result<CheckedAddress, AddressValidationError>> {
    future::ready(Ok(CheckedAddress::new(address))).boxed()
}

#[must_use]
pub fn create_acknowledgment_letter(order: &PricedOrderWithShippingMethod) -> HtmlString {
    let priced_order = order.priced_order();
    let name = priced_order.customer_info().name();

    HtmlString::new(format!(
        "<p>Dear {} {},</p>\
         <p>Your order {} has been received.</p>\
         <p>Amount to bill: {}. Shipping: {} via {}.</p>",
        name.first_name(),
        name.last_name(),
        priced_order.order_id(),
        priced_order.amount_to_bill(),
        order.shipping_info().shipping_cost(),
        order.shipping_info().shipping_method().as_str(),
    ))
}

/// Logs the acknowledgment instead of mailing it
pub fn send_acknowledgment(acknowledgment: &OrderAcknowledgment) -> SendResult {
    tracing::info!(
        email_address = %acknowledgment.email_address(),
        letter_length = acknowledgment.letter().value().len(),
        "sending order acknowledgment"
    );
    SendResult::Sent
}
