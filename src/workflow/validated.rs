//! Output of the validation stage

use thiserror::Error;

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{
    ConstraintError, OrderId, OrderLineId, OrderQuantity, ProductCode, PromotionCode, UnitKind,
};

use super::input::UnvalidatedAddress;

/// An address the address checker has confirmed to exist
///
/// Its fields are still raw; the validation stage re-validates them into an
/// [`Address`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckedAddress(UnvalidatedAddress);

impl CheckedAddress {
    #[must_use]
    pub const fn new(address: UnvalidatedAddress) -> Self {
        Self(address)
    }

    #[must_use]
    pub const fn address(&self) -> &UnvalidatedAddress {
        &self.0
    }
}

/// Why the address checker refused an address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddressValidationError {
    #[error("invalid format")]
    InvalidFormat,
    #[error("address not found")]
    AddressNotFound,
}

/// How the order is priced
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PricingMethod {
    #[default]
    Standard,
    Promotion(PromotionCode),
}

/// An order line whose quantity is measured the way its product requires
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrderLine {
    order_line_id: OrderLineId,
    product_code: ProductCode,
    quantity: OrderQuantity,
}

impl ValidatedOrderLine {
    /// Pairs a product with its quantity
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when a widget is given a kilogram quantity
    /// or a gizmo is given a unit quantity.
    pub fn create(
        order_line_id: OrderLineId,
        product_code: ProductCode,
        quantity: OrderQuantity,
    ) -> Result<Self, ConstraintError> {
        if !quantity.matches(&product_code) {
            let expected = match product_code.unit_kind() {
                UnitKind::Units => "units",
                UnitKind::Kilograms => "kilograms",
            };
            return Err(ConstraintError::new(
                "OrderQuantity",
                format!("OrderQuantity for {product_code} must be measured in {expected}"),
            ));
        }

        Ok(Self {
            order_line_id,
            product_code,
            quantity,
        })
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
}

/// An order whose every field passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    lines: Vec<ValidatedOrderLine>,
    pricing_method: PricingMethod,
}

impl ValidatedOrder {
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        lines: Vec<ValidatedOrderLine>,
        pricing_method: PricingMethod,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
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
    pub fn lines(&self) -> &[ValidatedOrderLine] {
        &self.lines
    }

    #[must_use]
    pub const fn pricing_method(&self) -> &PricingMethod {
        &self.pricing_method
    }
}
