//! Application configuration
//!
//! Loaded once at startup from environment variables, with `.env` support.
//!
//! | Variable | Default |
//! |---|---|
//! | `APP_HOST` | `0.0.0.0` |
//! | `APP_PORT` | `3000` |
//! | `STANDARD_UNIT_PRICE` | `10` |
//! | `ON_SALE_PRODUCT_CODE` | `W0001` |

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::simple_types::{Price, ProductCode};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STANDARD_UNIT_PRICE: i64 = 10;
const DEFAULT_ON_SALE_PRODUCT_CODE: &str = "W0001";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Display) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub app_host: String,
    pub app_port: u16,
    /// Unit price of every product outside a promotion
    pub standard_unit_price: Price,
    /// Product discounted by the built-in promotions
    pub on_sale_product_code: ProductCode,
}

impl AppConfig {
    /// Reads the configuration from the process environment and `.env`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to
    /// something that cannot be parsed or breaks its domain constraint.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<Lookup>(lookup: Lookup) -> Result<Self, ConfigError>
    where
        Lookup: Fn(&str) -> Option<String>,
    {
        let app_host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let app_port = parse_or("APP_PORT", lookup("APP_PORT"), DEFAULT_PORT)?;

        let unit_price = parse_or(
            "STANDARD_UNIT_PRICE",
            lookup("STANDARD_UNIT_PRICE"),
            Decimal::from(DEFAULT_STANDARD_UNIT_PRICE),
        )?;
        let standard_unit_price = Price::create(Some(unit_price))
            .map_err(|error| ConfigError::invalid("STANDARD_UNIT_PRICE", error))?;

        let on_sale = lookup("ON_SALE_PRODUCT_CODE");
        let on_sale_product_code = ProductCode::create(
            "ON_SALE_PRODUCT_CODE",
            Some(on_sale.as_deref().unwrap_or(DEFAULT_ON_SALE_PRODUCT_CODE)),
        )
        .map_err(|error| ConfigError::invalid("ON_SALE_PRODUCT_CODE", error))?;

        Ok(Self {
            app_host,
            app_port,
            standard_unit_price,
            on_sale_product_code,
        })
    }

    /// `host:port` to bind the HTTP listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_HOST.to_string(),
            app_port: DEFAULT_PORT,
            standard_unit_price: Price::unchecked(Decimal::from(DEFAULT_STANDARD_UNIT_PRICE)),
            on_sale_product_code: ProductCode::create(
                "ON_SALE_PRODUCT_CODE",
                Some(DEFAULT_ON_SALE_PRODUCT_CODE),
            )
            .unwrap_or_else(|error| panic!("default on-sale product code: {error}")),
        }
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .map_err(|error| ConfigError::invalid(key, error))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[rstest]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.standard_unit_price.value(), Decimal::from(10));
        assert_eq!(config.on_sale_product_code.value(), "W0001");
    }

    #[rstest]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "8080"),
            ("STANDARD_UNIT_PRICE", "12.5"),
            ("ON_SALE_PRODUCT_CODE", "G100"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.standard_unit_price.value(), Decimal::new(125, 1));
        assert_eq!(config.on_sale_product_code.value(), "G100");
    }

    #[rstest]
    #[case("APP_PORT", "eighty")]
    #[case("APP_PORT", "70000")]
    #[case("STANDARD_UNIT_PRICE", "abc")]
    #[case("STANDARD_UNIT_PRICE", "20000")]
    #[case("ON_SALE_PRODUCT_CODE", "X1")]
    fn rejects_invalid_values(#[case] key: &str, #[case] value: &str) {
        let error = AppConfig::from_lookup(lookup(&[(key, value)])).unwrap_err();

        assert!(matches!(error, ConfigError::InvalidValue { key: ref invalid, .. } if invalid == key));
        assert!(error.to_string().starts_with(&format!("Invalid value for {key}: ")));
    }
}
