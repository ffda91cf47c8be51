//! Pricing stage: `ValidatedOrder` to `PricedOrder`
//!
//! - [`get_pricing_function`] - resolves a [`PricingMethod`] to a price lookup
//! - [`to_priced_order_line`] - prices one line
//! - [`add_comment_line`] - notes an applied promotion
//! - [`price_order`] - the whole stage

use std::sync::Arc;

use crate::simple_types::{BillingAmount, Price, ProductCode, PromotionCode};

use super::errors::PricingError;
use super::priced::{PricedOrder, PricedOrderLine, PricedOrderProductLine};
use super::validated::{PricingMethod, ValidatedOrder, ValidatedOrderLine};

/// Unit price of a product
pub type GetProductPrice = Arc<dyn Fn(&ProductCode) -> Price + Send + Sync>;

/// Unit price of a product, if the lookup covers it
pub type TryGetProductPrice = Arc<dyn Fn(&ProductCode) -> Option<Price> + Send + Sync>;

/// Resolves the price lookup for a pricing method
pub type GetPricingFunction = Arc<dyn Fn(&PricingMethod) -> GetProductPrice + Send + Sync>;

/// Builds the pricing-method resolver
///
/// Standard pricing uses `get_standard_price`. A promotion uses its own
/// price where it has one and falls back to the standard price otherwise.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use order_taking::simple_types::{Price, ProductCode, PromotionCode};
/// use order_taking::workflow::{get_pricing_function, PricingMethod, TryGetProductPrice};
/// use rust_decimal::Decimal;
///
/// let standard = Arc::new(|_: &ProductCode| Price::unchecked(Decimal::from(10)));
/// let pricing = get_pricing_function(standard, |promotion: &PromotionCode| -> TryGetProductPrice {
///     let covered = promotion.value() == "HALF";
///     Arc::new(move |code: &ProductCode| {
///         (covered && code.value() == "W0001").then(|| Price::unchecked(Decimal::from(5)))
///     })
/// });
///
/// let widget = ProductCode::create("ProductCode", Some("W0001")).unwrap();
/// let other = ProductCode::create("ProductCode", Some("W0002")).unwrap();
/// let half = PricingMethod::Promotion(PromotionCode::create("PromotionCode", Some("HALF")).unwrap());
///
/// assert_eq!(pricing(&PricingMethod::Standard)(&widget).value(), Decimal::from(10));
/// assert_eq!(pricing(&half)(&widget).value(), Decimal::from(5));
/// assert_eq!(pricing(&half)(&other).value(), Decimal::from(10));
/// ```
pub fn get_pricing_function<GetPromotionPrices>(
    get_standard_price: GetProductPrice,
    get_promotion_prices: GetPromotionPrices,
) -> impl Fn(&PricingMethod) -> GetProductPrice + Send + Sync + 'static
where
    GetPromotionPrices: Fn(&PromotionCode) -> TryGetProductPrice + Send + Sync + 'static,
{
    move |pricing_method: &PricingMethod| -> GetProductPrice {
        match pricing_method {
            PricingMethod::Standard => Arc::clone(&get_standard_price),
            PricingMethod::Promotion(promotion_code) => {
                let get_promotion_price = get_promotion_prices(promotion_code);
                let standard_fallback = Arc::clone(&get_standard_price);

                Arc::new(move |product_code: &ProductCode| {
                    get_promotion_price(product_code)
                        .unwrap_or_else(|| standard_fallback(product_code))
                })
            }
        }
    }
}

/// Prices one line as unit price times quantity
///
/// # Errors
///
/// Returns [`PricingError`] when the line price leaves the `Price` range.
pub fn to_priced_order_line<GetPrice>(
    get_product_price: &GetPrice,
    validated_order_line: &ValidatedOrderLine,
) -> Result<PricedOrderLine, PricingError>
where
    GetPrice: Fn(&ProductCode) -> Price + ?Sized,
{
    let unit_price = get_product_price(validated_order_line.product_code());
    let line_price = unit_price.multiply(validated_order_line.quantity().value())?;

    Ok(PricedOrderLine::Product(PricedOrderProductLine::new(
        validated_order_line.order_line_id().clone(),
        validated_order_line.product_code().clone(),
        *validated_order_line.quantity(),
        line_price,
    )))
}

/// Appends `Applied promotion <code>` when a promotion was used
#[must_use]
pub fn add_comment_line(
    pricing_method: &PricingMethod,
    mut lines: Vec<PricedOrderLine>,
) -> Vec<PricedOrderLine> {
    if let PricingMethod::Promotion(promotion_code) = pricing_method {
        lines.push(PricedOrderLine::Comment(format!(
            "Applied promotion {promotion_code}"
        )));
    }
    lines
}

/// Prices every line and totals the bill
///
/// # Errors
///
/// Returns [`PricingError`] when a line price or the billing amount leaves
/// its allowed range.
pub fn price_order<GetPricing>(
    get_pricing_function: &GetPricing,
    validated_order: &ValidatedOrder,
) -> Result<PricedOrder, PricingError>
where
    GetPricing: Fn(&PricingMethod) -> GetProductPrice + ?Sized,
{
    let get_product_price = get_pricing_function(validated_order.pricing_method());

    let priced_lines = validated_order
        .lines()
        .iter()
        .map(|line| to_priced_order_line(&*get_product_price, line))
        .collect::<Result<Vec<_>, _>>()?;
    let lines = add_comment_line(validated_order.pricing_method(), priced_lines);

    let amount_to_bill = BillingAmount::sum_prices(lines.iter().map(PricedOrderLine::line_price))?;

    Ok(PricedOrder::new(
        validated_order.order_id().clone(),
        validated_order.customer_info().clone(),
        validated_order.shipping_address().clone(),
        validated_order.billing_address().clone(),
        amount_to_bill,
        lines,
        validated_order.pricing_method().clone(),
    ))
}
