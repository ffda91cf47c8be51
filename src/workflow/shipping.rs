//! Shipping stage
//!
//! | Category | Cost |
//! |---|---|
//! | US local state (CA, OR, AZ, NV) | 5 |
//! | US remote state | 10 |
//! | International | 20 |
//!
//! VIP customers ship for free whatever the category.

use rust_decimal::Decimal;

use crate::compound_types::Address;
use crate::simple_types::Price;

use super::priced::{PricedOrder, PricedOrderWithShippingMethod, ShippingInfo, ShippingMethod};

const US_COUNTRY: &str = "US";
const US_LOCAL_STATES: [&str; 4] = ["CA", "OR", "AZ", "NV"];

const LOCAL_STATE_SHIPPING_COST: i64 = 5;
const REMOTE_STATE_SHIPPING_COST: i64 = 10;
const INTERNATIONAL_SHIPPING_COST: i64 = 20;

/// Shipping category of an address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressCategory {
    UsLocalState,
    UsRemoteState,
    International,
}

/// Categorises a shipping address
///
/// Only US addresses in a local state get [`AddressCategory::UsLocalState`].
/// Every other address, including US addresses in other states, is
/// currently classified as [`AddressCategory::International`].
#[must_use]
pub fn classify_shipping_address(address: &Address) -> AddressCategory {
    let is_us = address.country().value() == US_COUNTRY;

    if is_us && US_LOCAL_STATES.contains(&address.state().value()) {
        AddressCategory::UsLocalState
    } else {
        // TODO: return UsRemoteState for other US states once remote pricing is confirmed
        AddressCategory::International
    }
}

/// Base shipping cost of a priced order, by shipping address category
#[must_use]
pub fn calculate_shipping_cost(priced_order: &PricedOrder) -> Price {
    let cost = match classify_shipping_address(priced_order.shipping_address()) {
        AddressCategory::UsLocalState => LOCAL_STATE_SHIPPING_COST,
        AddressCategory::UsRemoteState => REMOTE_STATE_SHIPPING_COST,
        AddressCategory::International => INTERNATIONAL_SHIPPING_COST,
    };

    Price::unchecked(Decimal::from(cost))
}

/// Attaches shipping info; the method is always [`ShippingMethod::Fedex24`]
#[must_use]
pub fn add_shipping_info_to_order<CalculateShippingCost>(
    calculate_shipping_cost: &CalculateShippingCost,
    priced_order: PricedOrder,
) -> PricedOrderWithShippingMethod
where
    CalculateShippingCost: Fn(&PricedOrder) -> Price + ?Sized,
{
    let shipping_cost = calculate_shipping_cost(&priced_order);
    let shipping_info = ShippingInfo::new(ShippingMethod::Fedex24, shipping_cost);

    PricedOrderWithShippingMethod::new(shipping_info, priced_order)
}

/// Zeroes the shipping cost for VIP customers, keeping the method
#[must_use]
pub fn free_vip_shipping(order: PricedOrderWithShippingMethod) -> PricedOrderWithShippingMethod {
    if order.priced_order().customer_info().is_vip() {
        let free_shipping = order.shipping_info().with_cost(Price::zero());
        order.with_shipping_info(free_shipping)
    } else {
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::{CustomerInfo, PersonalName};
    use crate::simple_types::{
        BillingAmount, EmailAddress, OrderId, String50, UsStateCode, VipStatus, ZipCode,
    };
    use crate::workflow::PricingMethod;
    use rstest::rstest;

    fn address(state: &str, country: &str) -> Address {
        Address::new(
            String50::create("AddressLine1", Some("1 Main St")).unwrap(),
            [None, None, None],
            String50::create("City", Some("Somewhere")).unwrap(),
            ZipCode::create("ZipCode", Some("12345")).unwrap(),
            UsStateCode::create("State", Some(state)).unwrap(),
            String50::create("Country", Some(country)).unwrap(),
        )
    }

    fn priced_order(state: &str, country: &str, vip_status: VipStatus) -> PricedOrder {
        let address = address(state, country);
        PricedOrder::new(
            OrderId::create("OrderId", Some("ORD-1")).unwrap(),
            CustomerInfo::new(
                PersonalName::new(
                    String50::create("FirstName", Some("Alan")).unwrap(),
                    String50::create("LastName", Some("Turing")).unwrap(),
                ),
                EmailAddress::create("EmailAddress", Some("alan@example.com")).unwrap(),
                vip_status,
            ),
            address.clone(),
            address,
            BillingAmount::sum_prices(std::iter::empty::<Price>()).unwrap(),
            Vec::new(),
            PricingMethod::Standard,
        )
    }

    #[rstest]
    #[case("CA", "US", AddressCategory::UsLocalState)]
    #[case("OR", "US", AddressCategory::UsLocalState)]
    #[case("AZ", "US", AddressCategory::UsLocalState)]
    #[case("NV", "US", AddressCategory::UsLocalState)]
    #[case("CA", "Canada", AddressCategory::International)]
    #[case("CA", "us", AddressCategory::International)]
    fn classifies_by_country_then_state(
        #[case] state: &str,
        #[case] country: &str,
        #[case] expected: AddressCategory,
    ) {
        assert_eq!(classify_shipping_address(&address(state, country)), expected);
    }

    #[rstest]
    #[case("NY")]
    #[case("TX")]
    fn other_us_states_are_treated_as_international(#[case] state: &str) {
        let order = priced_order(state, "US", VipStatus::Normal);

        assert_eq!(
            classify_shipping_address(order.shipping_address()),
            AddressCategory::International
        );
        assert_eq!(calculate_shipping_cost(&order).value(), Decimal::from(20));
    }

    #[rstest]
    #[case("CA", "US", 5)]
    #[case("CA", "Japan", 20)]
    fn shipping_info_uses_category_cost_and_fedex24(
        #[case] state: &str,
        #[case] country: &str,
        #[case] expected: i64,
    ) {
        let order = add_shipping_info_to_order(
            &calculate_shipping_cost,
            priced_order(state, country, VipStatus::Normal),
        );

        assert_eq!(order.shipping_info().shipping_method(), ShippingMethod::Fedex24);
        assert_eq!(order.shipping_info().shipping_cost().value(), Decimal::from(expected));
    }

    #[rstest]
    #[case(VipStatus::Vip, 0)]
    #[case(VipStatus::Normal, 20)]
    fn vip_customers_ship_for_free(#[case] vip_status: VipStatus, #[case] expected: i64) {
        let order = add_shipping_info_to_order(
            &calculate_shipping_cost,
            priced_order("CA", "Japan", vip_status),
        );

        let order = free_vip_shipping(order);

        assert_eq!(order.shipping_info().shipping_cost().value(), Decimal::from(expected));
        assert_eq!(order.shipping_info().shipping_method(), ShippingMethod::Fedex24);
    }
}
