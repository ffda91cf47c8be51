//! Constrained primitive types
//!
//! Each type wraps a single scalar and can only be obtained through a smart
//! constructor that checks the type's invariant. Constructors take the field
//! name used in error messages and the raw, possibly absent, value.
//!
//! ```
//! use order_taking::simple_types::{OrderId, ProductCode, String50};
//!
//! let order_id = OrderId::create("OrderId", Some("ORD-2024-001")).unwrap();
//! assert_eq!(order_id.value(), "ORD-2024-001");
//!
//! let error = String50::create("FirstName", None).unwrap_err();
//! assert_eq!(error.message(), "FirstName must not be empty or undefined");
//!
//! assert!(ProductCode::create("ProductCode", Some("W1234")).is_ok());
//! ```

pub mod constrained;
mod error;
mod misc;
mod money;
mod product;
mod quantity;
mod text;

pub use error::ConstraintError;
pub use misc::{PdfAttachment, VipStatus};
pub use money::{BillingAmount, Price};
pub use product::{GizmoCode, ProductCode, UnitKind, WidgetCode};
pub use quantity::{KilogramQuantity, OrderQuantity, UnitQuantity};
pub use text::{EmailAddress, OrderId, OrderLineId, PromotionCode, String50, UsStateCode, ZipCode};
