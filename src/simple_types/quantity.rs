//! Order quantities

use rust_decimal::Decimal;

use super::constrained;
use super::error::ConstraintError;
use super::product::{ProductCode, UnitKind};

/// Whole number of units, `0..=1000`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitQuantity(u32);

impl UnitQuantity {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 1000;

    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value is absent, outside `0..=1000`
    /// or not a whole number.
    pub fn create(field_name: &str, value: Option<Decimal>) -> Result<Self, ConstraintError> {
        constrained::create_integer(field_name, Self, Self::MIN, Self::MAX, value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Weight in kilograms, `0.0..=1000.0`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KilogramQuantity(Decimal);

impl KilogramQuantity {
    pub const MIN: Decimal = Decimal::ZERO;
    pub const MAX: Decimal = Decimal::ONE_THOUSAND;

    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value is absent or outside `0..=1000`.
    pub fn create(field_name: &str, value: Option<Decimal>) -> Result<Self, ConstraintError> {
        constrained::create_decimal(field_name, Self, Self::MIN, Self::MAX, value)
    }

    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

/// Quantity of an order line; the variant follows the product's [`UnitKind`]
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::{OrderQuantity, ProductCode};
/// use rust_decimal::Decimal;
///
/// let gizmo = ProductCode::create("ProductCode", Some("G123")).unwrap();
/// let quantity = OrderQuantity::create("Quantity", &gizmo, Some(Decimal::new(25, 1))).unwrap();
/// assert!(matches!(quantity, OrderQuantity::Kilograms(_)));
///
/// let widget = ProductCode::create("ProductCode", Some("W1234")).unwrap();
/// let error = OrderQuantity::create("Quantity", &widget, Some(Decimal::new(25, 1))).unwrap_err();
/// assert_eq!(error.message(), "Quantity should be integer");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderQuantity {
    Units(UnitQuantity),
    Kilograms(KilogramQuantity),
}

impl OrderQuantity {
    /// Validates `value` with the rules of the product's unit kind
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value breaks the unit or kilogram rules.
    pub fn create(
        field_name: &str,
        product_code: &ProductCode,
        value: Option<Decimal>,
    ) -> Result<Self, ConstraintError> {
        match product_code.unit_kind() {
            UnitKind::Units => UnitQuantity::create(field_name, value).map(Self::Units),
            UnitKind::Kilograms => KilogramQuantity::create(field_name, value).map(Self::Kilograms),
        }
    }

    #[must_use]
    pub const fn unit_kind(&self) -> UnitKind {
        match self {
            Self::Units(_) => UnitKind::Units,
            Self::Kilograms(_) => UnitKind::Kilograms,
        }
    }

    /// `true` when this quantity is measured the way `product_code` requires
    #[must_use]
    pub fn matches(&self, product_code: &ProductCode) -> bool {
        self.unit_kind() == product_code.unit_kind()
    }

    /// Numeric value, used as the multiplier for the unit price
    #[must_use]
    pub fn value(&self) -> Decimal {
        match self {
            Self::Units(units) => Decimal::from(units.value()),
            Self::Kilograms(kilograms) => kilograms.value(),
        }
    }
}
