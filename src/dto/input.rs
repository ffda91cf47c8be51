//! Request DTOs
//!
//! Every field may be missing from the JSON body. Missing fields reach the
//! smart constructors as `None` so that the validation stage reports them
//! with their domain field name.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compound_types::Address;
use crate::simple_types::String50;
use crate::workflow::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfoDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub vip_status: Option<String>,
}

impl CustomerInfoDto {
    #[must_use]
    pub fn to_unvalidated_customer_info(&self) -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email_address: self.email_address.clone(),
            vip_status: self.vip_status.clone(),
        }
    }
}

/// Address in both directions
///
/// On output, absent secondary lines are written as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressDto {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub address_line4: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl AddressDto {
    #[must_use]
    pub fn to_unvalidated_address(&self) -> UnvalidatedAddress {
        UnvalidatedAddress {
            address_line1: self.address_line1.clone(),
            address_line2: self.address_line2.clone(),
            address_line3: self.address_line3.clone(),
            address_line4: self.address_line4.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
        }
    }

    #[must_use]
    pub fn from_address(address: &Address) -> Self {
        let secondary = |line: Option<&String50>| {
            Some(line.map(|line| line.value().to_string()).unwrap_or_default())
        };

        Self {
            address_line1: Some(address.address_line1().value().to_string()),
            address_line2: secondary(address.address_line2()),
            address_line3: secondary(address.address_line3()),
            address_line4: secondary(address.address_line4()),
            city: Some(address.city().value().to_string()),
            zip_code: Some(address.zip_code().value().to_string()),
            state: Some(address.state().value().to_string()),
            country: Some(address.country().value().to_string()),
        }
    }
}

/// One order line; `quantity` may be a JSON number or a numeric string
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFormLineDto {
    pub order_line_id: Option<String>,
    pub product_code: Option<String>,
    pub quantity: Option<Decimal>,
}

impl OrderFormLineDto {
    #[must_use]
    pub fn to_unvalidated_order_line(&self) -> UnvalidatedOrderLine {
        UnvalidatedOrderLine {
            order_line_id: self.order_line_id.clone(),
            product_code: self.product_code.clone(),
            quantity: self.quantity,
        }
    }
}

/// Body of `POST /orders`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFormDto {
    pub order_id: Option<String>,
    pub customer_info: CustomerInfoDto,
    pub shipping_address: AddressDto,
    pub billing_address: AddressDto,
    pub lines: Vec<OrderFormLineDto>,
    pub promotion_code: Option<String>,
}

impl OrderFormDto {
    #[must_use]
    pub fn to_unvalidated_order(&self) -> UnvalidatedOrder {
        UnvalidatedOrder {
            order_id: self.order_id.clone(),
            customer_info: self.customer_info.to_unvalidated_customer_info(),
            shipping_address: self.shipping_address.to_unvalidated_address(),
            billing_address: self.billing_address.to_unvalidated_address(),
            lines: self
                .lines
                .iter()
                .map(OrderFormLineDto::to_unvalidated_order_line)
                .collect(),
            promotion_code: self.promotion_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn deserializes_camel_case_form() {
        let json = r#"{
            "orderId": "ORD-1",
            "customerInfo": {"firstName": "Ada", "lastName": "Lovelace",
                             "emailAddress": "ada@example.com", "vipStatus": "vip"},
            "shippingAddress": {"addressLine1": "1 Main St", "city": "Reno",
                                "zipCode": "89501", "state": "NV", "country": "US"},
            "lines": [{"orderLineId": "L1", "productCode": "W1234", "quantity": 3}],
            "promotionCode": "HALF"
        }"#;

        let form: OrderFormDto = serde_json::from_str(json).unwrap();
        let order = form.to_unvalidated_order();

        assert_eq!(order.order_id.as_deref(), Some("ORD-1"));
        assert_eq!(order.customer_info.vip_status.as_deref(), Some("vip"));
        assert_eq!(order.shipping_address.zip_code.as_deref(), Some("89501"));
        assert_eq!(order.billing_address, UnvalidatedAddress::default());
        assert_eq!(order.lines[0].quantity, Some(Decimal::from(3)));
        assert_eq!(order.promotion_code.as_deref(), Some("HALF"));
    }

    #[rstest]
    #[case(r#"{"quantity": 2.5}"#, Some(Decimal::new(25, 1)))]
    #[case(r#"{"quantity": "2.5"}"#, Some(Decimal::new(25, 1)))]
    #[case(r#"{"quantity": 7}"#, Some(Decimal::from(7)))]
    #[case(r#"{}"#, None)]
    fn quantity_accepts_numbers_and_strings(#[case] json: &str, #[case] expected: Option<Decimal>) {
        let line: OrderFormLineDto = serde_json::from_str(json).unwrap();

        assert_eq!(line.quantity, expected);
    }

    #[rstest]
    fn empty_body_is_an_empty_form() {
        let form: OrderFormDto = serde_json::from_str("{}").unwrap();

        assert_eq!(form.to_unvalidated_order(), UnvalidatedOrder::default());
    }
}
