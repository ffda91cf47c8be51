//! Product codes
//!
//! A [`ProductCode`] is either a widget (`W` + 4 digits, counted in units)
//! or a gizmo (`G` + 3 digits, weighed in kilograms). The prefix of the raw
//! string decides which rules apply.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::constrained;
use super::error::ConstraintError;

static WIDGET_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^W[0-9]{4}$").expect("invalid widget code pattern"));

static GIZMO_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^G[0-9]{3}$").expect("invalid gizmo code pattern"));

/// Widget product code, `W` followed by four digits
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetCode(String);

impl WidgetCode {
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value is absent, empty, or not `W` + 4 digits.
    pub fn create(field_name: &str, value: Option<&str>) -> Result<Self, ConstraintError> {
        constrained::create_like(field_name, Self, &WIDGET_CODE_PATTERN, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Gizmo product code, `G` followed by three digits
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GizmoCode(String);

impl GizmoCode {
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value is absent, empty, or not `G` + 3 digits.
    pub fn create(field_name: &str, value: Option<&str>) -> Result<Self, ConstraintError> {
        constrained::create_like(field_name, Self, &GIZMO_CODE_PATTERN, value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// How a product is measured when ordered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Counted in whole units
    Units,
    /// Weighed in kilograms
    Kilograms,
}

/// Product code, discriminated by the prefix of the raw string
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::{ProductCode, UnitKind};
///
/// let widget = ProductCode::create("ProductCode", Some("W1234")).unwrap();
/// assert_eq!(widget.unit_kind(), UnitKind::Units);
///
/// let gizmo = ProductCode::create("ProductCode", Some("G123")).unwrap();
/// assert_eq!(gizmo.unit_kind(), UnitKind::Kilograms);
///
/// let error = ProductCode::create("ProductCode", Some("X999")).unwrap_err();
/// assert_eq!(error.message(), "ProductCode format not recognized 'X999'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProductCode {
    Widget(WidgetCode),
    Gizmo(GizmoCode),
}

impl ProductCode {
    /// Dispatches on the first character: `W` ⇒ widget rules, `G` ⇒ gizmo rules
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value is absent or empty, has an
    /// unknown prefix, or breaks the widget/gizmo pattern.
    pub fn create(field_name: &str, value: Option<&str>) -> Result<Self, ConstraintError> {
        match value {
            None | Some("") => Err(ConstraintError::new(
                field_name,
                format!("{field_name} must not be empty or undefined"),
            )),
            Some(code) if code.starts_with('W') => {
                WidgetCode::create(field_name, Some(code)).map(Self::Widget)
            }
            Some(code) if code.starts_with('G') => {
                GizmoCode::create(field_name, Some(code)).map(Self::Gizmo)
            }
            Some(code) => Err(ConstraintError::new(
                field_name,
                format!("{field_name} format not recognized '{code}'"),
            )),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Widget(code) => code.value(),
            Self::Gizmo(code) => code.value(),
        }
    }

    /// The quantity kind an order line for this product must use
    #[must_use]
    pub const fn unit_kind(&self) -> UnitKind {
        match self {
            Self::Widget(_) => UnitKind::Units,
            Self::Gizmo(_) => UnitKind::Kilograms,
        }
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.value())
    }
}
