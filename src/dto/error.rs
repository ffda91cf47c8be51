//! Error DTO

use serde::{Deserialize, Serialize};

use crate::workflow::PlaceOrderError;

/// `{"code": "ValidationError", "message": "..."}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderErrorDto {
    pub code: String,
    pub message: String,
}

impl PlaceOrderErrorDto {
    #[must_use]
    pub fn from_domain(error: &PlaceOrderError) -> Self {
        let code = match error {
            PlaceOrderError::Validation(_) => "ValidationError",
            PlaceOrderError::Pricing(_) => "PricingError",
            PlaceOrderError::RemoteService(_) => "RemoteServiceError",
        };

        Self {
            code: code.to_string(),
            message: error.message(),
        }
    }

    /// For request bodies that are not valid order JSON
    #[must_use]
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self {
            code: "ValidationError".to_string(),
            message: message.into(),
        }
    }
}
