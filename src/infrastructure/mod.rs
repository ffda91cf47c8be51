//! Host side of the service: configuration, prices and default capabilities

mod catalog;
mod config;
mod dependencies;
pub mod services;

pub use catalog::PriceCatalog;
pub use config::{AppConfig, ConfigError};
pub use dependencies::{
    AppDependencies, CalculateShippingCost, CheckAddressExists, CheckProductExists,
    CreateAcknowledgmentLetter, SendAcknowledgment,
};
