//! Error taxonomy of the `PlaceOrder` workflow
//!
//! ```text
//! PlaceOrderError
//! ├── Validation(ValidationError)        bad input, unknown product, failed address check
//! ├── Pricing(PricingError)              line price or total out of range
//! └── RemoteService(RemoteServiceError)  failure of an external dependency
//! ```

use std::fmt;
use thiserror::Error;

use crate::simple_types::ConstraintError;

/// The order could not be validated
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ConstraintError> for ValidationError {
    fn from(error: ConstraintError) -> Self {
        Self::new(error.into_message())
    }
}

/// A computed price or total left its allowed range
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PricingError {
    message: String,
}

impl PricingError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ConstraintError> for PricingError {
    fn from(error: ConstraintError) -> Self {
        Self::new(error.into_message())
    }
}

/// Identifies an external service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceInfo {
    name: String,
    endpoint: String,
}

impl ServiceInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Display for ServiceInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// An external dependency failed
///
/// None of the default capabilities raise this; it is part of the union so
/// that remote pricing or shipping services can report failures without
/// changing the workflow's signature.
///
/// ```
/// use order_taking::workflow::{RemoteServiceError, ServiceInfo};
///
/// let error = RemoteServiceError::new(
///     ServiceInfo::new("PricingService", "https://pricing.internal/v1"),
///     "connection refused",
/// );
/// assert_eq!(error.to_string(), "PricingService connection refused");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{service} {exception}")]
pub struct RemoteServiceError {
    service: ServiceInfo,
    exception: String,
}

impl RemoteServiceError {
    #[must_use]
    pub fn new(service: ServiceInfo, exception: impl Into<String>) -> Self {
        Self {
            service,
            exception: exception.into(),
        }
    }

    #[must_use]
    pub const fn service(&self) -> &ServiceInfo {
        &self.service
    }

    #[must_use]
    pub fn exception(&self) -> &str {
        &self.exception
    }
}

/// Any failure of the `PlaceOrder` workflow; the first one encountered wins
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),
    #[error("remote service error: {0}")]
    RemoteService(#[from] RemoteServiceError),
}

impl PlaceOrderError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_pricing(&self) -> bool {
        matches!(self, Self::Pricing(_))
    }

    #[must_use]
    pub const fn is_remote_service(&self) -> bool {
        matches!(self, Self::RemoteService(_))
    }

    /// Human readable message without the category prefix
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Validation(error) => error.message().to_string(),
            Self::Pricing(error) => error.message().to_string(),
            Self::RemoteService(error) => error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constraint_errors_keep_their_message() {
        let constraint = ConstraintError::new("City", "City must be less than 50");

        assert_eq!(ValidationError::from(constraint.clone()).message(), "City must be less than 50");
        assert_eq!(PricingError::from(constraint).message(), "City must be less than 50");
    }

    #[rstest]
    fn place_order_error_categories() {
        let validation: PlaceOrderError = ValidationError::new("bad").into();
        let pricing: PlaceOrderError = PricingError::new("too much").into();
        let remote: PlaceOrderError =
            RemoteServiceError::new(ServiceInfo::new("Mail", "smtp://mail"), "timeout").into();

        assert!(validation.is_validation());
        assert!(pricing.is_pricing());
        assert!(remote.is_remote_service());
        assert_eq!(validation.to_string(), "validation error: bad");
        assert_eq!(remote.message(), "Mail timeout");
    }

    #[rstest]
    fn service_info_accessors() {
        let service = ServiceInfo::new("AddressCheck", "https://address.example/check");

        assert_eq!(service.name(), "AddressCheck");
        assert_eq!(service.endpoint(), "https://address.example/check");
    }
}
