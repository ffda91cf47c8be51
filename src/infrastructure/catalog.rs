//! Price catalog backing the pricing stage

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::simple_types::{Price, ProductCode, PromotionCode};
use crate::workflow::{GetPricingFunction, GetProductPrice, TryGetProductPrice, get_pricing_function};

use super::config::AppConfig;

/// Built-in promotions on the on-sale product: code, price mantissa, price scale
const BUILT_IN_PROMOTIONS: [(&str, i64, u32); 2] = [("HALF", 55, 1), ("QUARTER", 25, 1)];

/// Standard unit price plus per-promotion overrides
///
/// Promotions are keyed by promotion code, then by product code.
///
/// ```
/// use order_taking::infrastructure::PriceCatalog;
/// use order_taking::simple_types::{Price, ProductCode, PromotionCode};
/// use order_taking::workflow::PricingMethod;
/// use rust_decimal::Decimal;
///
/// let widget = ProductCode::create("ProductCode", Some("W0001")).unwrap();
/// let catalog = PriceCatalog::new(Price::unchecked(Decimal::from(10)))
///     .with_promotion_price("SPRING", &widget, Price::unchecked(Decimal::from(7)));
/// let pricing = catalog.pricing_function();
///
/// let spring = PromotionCode::create("PromotionCode", Some("SPRING")).unwrap();
/// assert_eq!(pricing(&PricingMethod::Promotion(spring))(&widget).value(), Decimal::from(7));
/// assert_eq!(pricing(&PricingMethod::Standard)(&widget).value(), Decimal::from(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceCatalog {
    standard_unit_price: Price,
    promotions: HashMap<String, HashMap<String, Price>>,
}

impl PriceCatalog {
    #[must_use]
    pub fn new(standard_unit_price: Price) -> Self {
        Self {
            standard_unit_price,
            promotions: HashMap::new(),
        }
    }

    /// Catalog with the configured standard price and the `HALF` and
    /// `QUARTER` promotions on the configured on-sale product
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        BUILT_IN_PROMOTIONS.iter().fold(
            Self::new(config.standard_unit_price),
            |catalog, &(promotion_code, mantissa, scale)| {
                catalog.with_promotion_price(
                    promotion_code,
                    &config.on_sale_product_code,
                    Price::unchecked(Decimal::new(mantissa, scale)),
                )
            },
        )
    }

    #[must_use]
    pub fn with_promotion_price(
        mut self,
        promotion_code: &str,
        product_code: &ProductCode,
        price: Price,
    ) -> Self {
        self.promotions
            .entry(promotion_code.to_string())
            .or_default()
            .insert(product_code.value().to_string(), price);
        self
    }

    #[must_use]
    pub const fn standard_unit_price(&self) -> Price {
        self.standard_unit_price
    }

    #[must_use]
    pub fn promotion_price(&self, promotion_code: &PromotionCode, product_code: &ProductCode) -> Option<Price> {
        self.promotions
            .get(promotion_code.value())
            .and_then(|prices| prices.get(product_code.value()))
            .copied()
    }

    #[must_use]
    pub fn standard_price_lookup(&self) -> GetProductPrice {
        let price = self.standard_unit_price;
        Arc::new(move |_: &ProductCode| price)
    }

    /// Lookup for one promotion; products it does not cover yield `None`
    #[must_use]
    pub fn promotion_price_lookup(&self, promotion_code: &PromotionCode) -> TryGetProductPrice {
        let prices = self
            .promotions
            .get(promotion_code.value())
            .cloned()
            .unwrap_or_default();
        Arc::new(move |product_code: &ProductCode| prices.get(product_code.value()).copied())
    }

    /// Resolver handed to the pricing stage
    #[must_use]
    pub fn pricing_function(&self) -> GetPricingFunction {
        let catalog = self.clone();
        Arc::new(get_pricing_function(
            self.standard_price_lookup(),
            move |promotion_code: &PromotionCode| catalog.promotion_price_lookup(promotion_code),
        ))
    }
}
