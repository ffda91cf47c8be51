//! Dependency container handed to the HTTP layer
//!
//! Holds every capability `place_order` needs behind an `Arc`, so the
//! container can be shared across requests. Tests swap single capabilities
//! with the `with_*` methods.

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::simple_types::{Price, ProductCode};
use crate::workflow::{
    AddressValidationError, CheckedAddress, GetPricingFunction, HtmlString, OrderAcknowledgment,
    PlaceOrderError, PlaceOrderEvent, PricedOrder, PricedOrderWithShippingMethod, SendResult,
    UnvalidatedAddress, UnvalidatedOrder, calculate_shipping_cost, place_order,
};

use super::catalog::PriceCatalog;
use super::config::AppConfig;
use super::services;

pub type CheckProductExists = Arc<dyn Fn(&ProductCode) -> bool + Send + Sync>;
pub type CheckAddressExists = Arc<
    dyn Fn(UnvalidatedAddress) -> BoxFuture<'static, Result<CheckedAddress, AddressValidationError>>
        + Send
        + Sync,
>;
pub type CalculateShippingCost = Arc<dyn Fn(&PricedOrder) -> Price + Send + Sync>;
pub type CreateAcknowledgmentLetter =
    Arc<dyn Fn(&PricedOrderWithShippingMethod) -> HtmlString + Send + Sync>;
pub type SendAcknowledgment = Arc<dyn Fn(&OrderAcknowledgment) -> SendResult + Send + Sync>;

#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    check_product_exists: CheckProductExists,
    check_address_exists: CheckAddressExists,
    get_pricing_function: GetPricingFunction,
    calculate_shipping_cost: CalculateShippingCost,
    create_acknowledgment_letter: CreateAcknowledgmentLetter,
    send_acknowledgment: SendAcknowledgment,
}

impl AppDependencies {
    /// Default capabilities, priced from the configured catalog
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let catalog = PriceCatalog::from_config(&config);

        Self {
            config,
            check_product_exists: Arc::new(services::check_product_exists),
            check_address_exists: Arc::new(services::check_address_exists),
            get_pricing_function: catalog.pricing_function(),
            calculate_shipping_cost: Arc::new(calculate_shipping_cost),
            create_acknowledgment_letter: Arc::new(services::create_acknowledgment_letter),
            send_acknowledgment: Arc::new(services::send_acknowledgment),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn with_check_product_exists(mut self, check_product_exists: CheckProductExists) -> Self {
        self.check_product_exists = check_product_exists;
        self
    }

    #[must_use]
    pub fn with_check_address_exists(mut self, check_address_exists: CheckAddressExists) -> Self {
        self.check_address_exists = check_address_exists;
        self
    }

    #[must_use]
    pub fn with_pricing_function(mut self, get_pricing_function: GetPricingFunction) -> Self {
        self.get_pricing_function = get_pricing_function;
        self
    }

    #[must_use]
    pub fn with_send_acknowledgment(mut self, send_acknowledgment: SendAcknowledgment) -> Self {
        self.send_acknowledgment = send_acknowledgment;
        self
    }

    /// Runs the workflow with the held capabilities
    ///
    /// # Errors
    ///
    /// Returns the workflow's [`PlaceOrderError`].
    pub async fn place_order(
        &self,
        unvalidated_order: &UnvalidatedOrder,
    ) -> Result<Vec<PlaceOrderEvent>, PlaceOrderError> {
        place_order(
            &*self.check_product_exists,
            &*self.check_address_exists,
            &*self.get_pricing_function,
            &*self.calculate_shipping_cost,
            &*self.create_acknowledgment_letter,
            &*self.send_acknowledgment,
            unvalidated_order,
        )
        .await
    }
}

impl Default for AppDependencies {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
