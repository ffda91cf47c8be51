//! Priced order and its shipping extension
//!
//! - [`PricedOrderProductLine`] / [`PricedOrderLine`]: order lines after pricing
//! - [`PricedOrder`]: a validated order with line prices and a billing amount
//! - [`ShippingMethod`] / [`ShippingInfo`]: how and at what cost the order ships
//! - [`PricedOrderWithShippingMethod`]: a priced order ready for acknowledgment

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{BillingAmount, OrderId, OrderLineId, OrderQuantity, Price, ProductCode};

use super::validated::PricingMethod;

/// A product line with its computed price (unit price times quantity)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrderProductLine {
    order_line_id: OrderLineId,
    product_code: ProductCode,
    quantity: OrderQuantity,
    line_price: Price,
}

impl PricedOrderProductLine {
    #[must_use]
    pub const fn new(
        order_line_id: OrderLineId,
        product_code: ProductCode,
        quantity: OrderQuantity,
        line_price: Price,
    ) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
            line_price,
        }
    }

    #[must_use]
    pub const fn order_line_id(&self) -> &OrderLineId {
        &self.order_line_id
    }

    #[must_use]
    pub const fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    #[must_use]
    pub const fn quantity(&self) -> &OrderQuantity {
        &self.quantity
    }

    #[must_use]
    pub const fn line_price(&self) -> Price {
        self.line_price
    }
}

/// A line of a priced order
///
/// Comment lines annotate the order and carry no price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PricedOrderLine {
    Product(PricedOrderProductLine),
    Comment(String),
}

impl PricedOrderLine {
    /// Price the line contributes to the billing amount
    ///
    /// ```
    /// use order_taking::workflow::PricedOrderLine;
    /// use rust_decimal::Decimal;
    ///
    /// let comment = PricedOrderLine::Comment("Applied promotion HALF".to_string());
    /// assert_eq!(comment.line_price().value(), Decimal::ZERO);
    /// ```
    #[must_use]
    pub const fn line_price(&self) -> Price {
        match self {
            Self::Product(line) => line.line_price(),
            Self::Comment(_) => Price::zero(),
        }
    }

    #[must_use]
    pub const fn as_product_line(&self) -> Option<&PricedOrderProductLine> {
        match self {
            Self::Product(line) => Some(line),
            Self::Comment(_) => None,
        }
    }

    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::Comment(_))
    }
}

/// An order after the pricing stage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    amount_to_bill: BillingAmount,
    lines: Vec<PricedOrderLine>,
    pricing_method: PricingMethod,
}

impl PricedOrder {
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        amount_to_bill: BillingAmount,
        lines: Vec<PricedOrderLine>,
        pricing_method: PricingMethod,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            amount_to_bill,
            lines,
            pricing_method,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn customer_info(&self) -> &CustomerInfo {
        &self.customer_info
    }

    #[must_use]
    pub const fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    #[must_use]
    pub const fn amount_to_bill(&self) -> BillingAmount {
        self.amount_to_bill
    }

    #[must_use]
    pub fn lines(&self) -> &[PricedOrderLine] {
        &self.lines
    }

    /// Product lines only, in order
    pub fn product_lines(&self) -> impl Iterator<Item = &PricedOrderProductLine> {
        self.lines.iter().filter_map(PricedOrderLine::as_product_line)
    }

    #[must_use]
    pub const fn pricing_method(&self) -> &PricingMethod {
        &self.pricing_method
    }
}

/// Carrier service used to ship an order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    PostalService,
    Fedex24,
    Fedex48,
    Ups48,
}

impl ShippingMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostalService => "PostalService",
            Self::Fedex24 => "Fedex24",
            Self::Fedex48 => "Fedex48",
            Self::Ups48 => "Ups48",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShippingInfo {
    shipping_method: ShippingMethod,
    shipping_cost: Price,
}

impl ShippingInfo {
    #[must_use]
    pub const fn new(shipping_method: ShippingMethod, shipping_cost: Price) -> Self {
        Self {
            shipping_method,
            shipping_cost,
        }
    }

    #[must_use]
    pub const fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    #[must_use]
    pub const fn shipping_cost(&self) -> Price {
        self.shipping_cost
    }

    /// Same method, different cost
    #[must_use]
    pub const fn with_cost(self, shipping_cost: Price) -> Self {
        Self {
            shipping_cost,
            ..self
        }
    }
}

/// A priced order together with how it ships
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrderWithShippingMethod {
    shipping_info: ShippingInfo,
    priced_order: PricedOrder,
}

impl PricedOrderWithShippingMethod {
    #[must_use]
    pub const fn new(shipping_info: ShippingInfo, priced_order: PricedOrder) -> Self {
        Self {
            shipping_info,
            priced_order,
        }
    }

    #[must_use]
    pub const fn shipping_info(&self) -> &ShippingInfo {
        &self.shipping_info
    }

    #[must_use]
    pub const fn priced_order(&self) -> &PricedOrder {
        &self.priced_order
    }

    #[must_use]
    pub fn with_shipping_info(self, shipping_info: ShippingInfo) -> Self {
        Self {
            shipping_info,
            ..self
        }
    }
}
