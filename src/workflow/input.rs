//! Unvalidated order, as handed over by the caller
//!
//! Every field is optional: an absent value travels untouched into the
//! smart constructors, which report it with the field's name.

use rust_decimal::Decimal;

/// Customer section of an order form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnvalidatedCustomerInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub vip_status: Option<String>,
}

/// Address section of an order form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnvalidatedAddress {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub address_line4: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// One requested product and amount
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnvalidatedOrderLine {
    pub order_line_id: Option<String>,
    pub product_code: Option<String>,
    pub quantity: Option<Decimal>,
}

/// A complete, untrusted order submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnvalidatedOrder {
    pub order_id: Option<String>,
    pub customer_info: UnvalidatedCustomerInfo,
    pub shipping_address: UnvalidatedAddress,
    pub billing_address: UnvalidatedAddress,
    pub lines: Vec<UnvalidatedOrderLine>,
    pub promotion_code: Option<String>,
}
