//! The `PlaceOrder` workflow
//!
//! ```text
//! UnvalidatedOrder
//!   -> validate_order      (ValidationError)
//!   -> price_order         (PricingError)
//!   -> add_shipping_info_to_order -> free_vip_shipping
//!   -> acknowledge_order
//!   -> create_events
//! ```

use std::future::Future;

use crate::simple_types::{Price, ProductCode};

use super::acknowledgment::{HtmlString, OrderAcknowledgment, SendResult, acknowledge_order};
use super::errors::PlaceOrderError;
use super::events::{PlaceOrderEvent, create_events};
use super::input::{UnvalidatedAddress, UnvalidatedOrder};
use super::priced::{PricedOrder, PricedOrderWithShippingMethod};
use super::pricing::{GetProductPrice, price_order};
use super::shipping::{add_shipping_info_to_order, free_vip_shipping};
use super::validated::{AddressValidationError, CheckedAddress, PricingMethod};
use super::validation::validate_order;

/// Places an order, returning the events to publish
///
/// Every capability is injected. Validation and pricing failures stop the
/// workflow; shipping, acknowledgment and event assembly cannot fail.
///
/// # Errors
///
/// Returns [`PlaceOrderError::Validation`] or [`PlaceOrderError::Pricing`]
/// for the first stage that fails.
#[allow(clippy::too_many_arguments)]
pub async fn place_order<
    CheckProduct,
    CheckAddress,
    CheckAddressFuture,
    GetPricing,
    CalculateShipping,
    CreateLetter,
    SendAcknowledgment,
>(
    check_product_exists: &CheckProduct,
    check_address_exists: &CheckAddress,
    get_pricing_function: &GetPricing,
    calculate_shipping_cost: &CalculateShipping,
    create_acknowledgment_letter: &CreateLetter,
    send_acknowledgment: &SendAcknowledgment,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<Vec<PlaceOrderEvent>, PlaceOrderError>
where
    CheckProduct: Fn(&ProductCode) -> bool + ?Sized,
    CheckAddress: Fn(UnvalidatedAddress) -> CheckAddressFuture + ?Sized,
    CheckAddressFuture: Future<Output = Result<CheckedAddress, AddressValidationError>>,
    GetPricing: Fn(&PricingMethod) -> GetProductPrice + ?Sized,
    CalculateShipping: Fn(&PricedOrder) -> Price + ?Sized,
    CreateLetter: Fn(&PricedOrderWithShippingMethod) -> HtmlString + ?Sized,
    SendAcknowledgment: Fn(&OrderAcknowledgment) -> SendResult + ?Sized,
{
    let order_id = unvalidated_order.order_id.as_deref().unwrap_or_default();
    tracing::info!(order_id, lines = unvalidated_order.lines.len(), "placing order");

    let validated_order =
        validate_order(check_product_exists, check_address_exists, unvalidated_order)
            .await
            .inspect_err(|error| tracing::warn!(order_id, %error, "order validation failed"))?;
    tracing::debug!(order_id, "order validated");

    let priced_order = price_order(get_pricing_function, &validated_order)
        .inspect_err(|error| tracing::warn!(order_id, %error, "order pricing failed"))?;
    tracing::debug!(
        order_id,
        amount_to_bill = %priced_order.amount_to_bill(),
        "order priced"
    );

    let order_with_shipping =
        free_vip_shipping(add_shipping_info_to_order(calculate_shipping_cost, priced_order));
    tracing::debug!(
        order_id,
        shipping_cost = %order_with_shipping.shipping_info().shipping_cost(),
        "shipping added"
    );

    let acknowledgment = acknowledge_order(
        create_acknowledgment_letter,
        send_acknowledgment,
        &order_with_shipping,
    );

    let events = create_events(&order_with_shipping, acknowledgment);
    tracing::info!(order_id, events = events.len(), "order placed");

    Ok(events)
}
