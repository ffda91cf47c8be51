//! Monetary amounts

use rust_decimal::Decimal;
use std::fmt;

use super::constrained;
use super::error::ConstraintError;

const PRICE_FIELD: &str = "Price";
const BILLING_AMOUNT_FIELD: &str = "BillingAmount";
const MAX_AMOUNT: i64 = 10_000;

/// Price of a product or an order line, `0..=10000`
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::Price;
/// use rust_decimal::Decimal;
///
/// let unit_price = Price::create(Some(Decimal::new(250, 2))).unwrap();
/// let line_price = unit_price.multiply(Decimal::from(4)).unwrap();
/// assert_eq!(line_price.value(), Decimal::from(10));
///
/// assert!(unit_price.multiply(Decimal::from(5000)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(Decimal);

impl Price {
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value is absent or outside `0..=10000`.
    pub fn create(value: Option<Decimal>) -> Result<Self, ConstraintError> {
        constrained::create_decimal(
            PRICE_FIELD,
            Self,
            Decimal::ZERO,
            Decimal::from(MAX_AMOUNT),
            value,
        )
    }

    /// Wraps a value known to be in range, such as a catalog constant
    ///
    /// # Panics
    ///
    /// Panics when `value` is outside `0..=10000`.
    #[must_use]
    pub fn unchecked(value: Decimal) -> Self {
        match Self::create(Some(value)) {
            Ok(price) => price,
            Err(error) => panic!("not a valid price: {error}"),
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Scales the price by `quantity`; the product must still be a valid price
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the scaled price leaves `0..=10000`
    /// or the multiplication overflows.
    pub fn multiply(self, quantity: Decimal) -> Result<Self, ConstraintError> {
        let scaled = self.0.checked_mul(quantity).ok_or_else(|| {
            ConstraintError::new(
                PRICE_FIELD,
                format!("{PRICE_FIELD} should be between 0 and {MAX_AMOUNT}"),
            )
        })?;
        Self::create(Some(scaled))
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}

/// Total amount to bill for an order, `0..=10000`
///
/// Only obtainable by summing line prices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BillingAmount(Decimal);

impl BillingAmount {
    /// Sums `prices` into a billing amount
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the total exceeds 10000.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_taking::simple_types::{BillingAmount, Price};
    /// use rust_decimal::Decimal;
    ///
    /// let prices = [Price::unchecked(Decimal::from(6000)), Price::unchecked(Decimal::from(4000))];
    /// assert_eq!(BillingAmount::sum_prices(prices).unwrap().value(), Decimal::from(10_000));
    ///
    /// let too_much = [Price::unchecked(Decimal::from(6000)), Price::unchecked(Decimal::from(4001))];
    /// assert!(BillingAmount::sum_prices(too_much).is_err());
    /// ```
    pub fn sum_prices<I>(prices: I) -> Result<Self, ConstraintError>
    where
        I: IntoIterator<Item = Price>,
    {
        let total = prices
            .into_iter()
            .try_fold(Decimal::ZERO, |total, price| total.checked_add(price.value()));

        constrained::create_decimal(
            BILLING_AMOUNT_FIELD,
            Self,
            Decimal::ZERO,
            Decimal::from(MAX_AMOUNT),
            Some(total.unwrap_or(Decimal::MAX)),
        )
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// `true` when there is something to bill
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl fmt::Display for BillingAmount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, formatter)
    }
}
