//! Response DTOs
//!
//! Events serialize as single-key objects, e.g.
//! `{"billableOrderPlaced": {"orderId": "42", ...}}`. Decimals are written as
//! strings.

use base64::Engine;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::workflow::{
    BillableOrderPlaced, OrderAcknowledgmentSent, PlaceOrderEvent, ShippableOrderLine,
    ShippableOrderPlaced, ShippingInfo,
};

use super::input::AddressDto;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippableOrderLineDto {
    pub order_line_id: String,
    pub product_code: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
}

impl ShippableOrderLineDto {
    #[must_use]
    pub fn from_domain(line: &ShippableOrderLine) -> Self {
        Self {
            order_line_id: line.order_line_id().value().to_string(),
            product_code: line.product_code().value().to_string(),
            quantity: line.quantity().value(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfoDto {
    pub shipping_method: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub shipping_cost: Decimal,
}

impl ShippingInfoDto {
    #[must_use]
    pub fn from_domain(info: &ShippingInfo) -> Self {
        Self {
            shipping_method: info.shipping_method().as_str().to_string(),
            shipping_cost: info.shipping_cost().value(),
        }
    }
}

/// PDF attachment with its bytes as standard base64
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfAttachmentDto {
    pub name: String,
    pub bytes: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippableOrderPlacedDto {
    pub order_id: String,
    pub shipping_address: AddressDto,
    pub shipment_lines: Vec<ShippableOrderLineDto>,
    pub shipping_info: ShippingInfoDto,
    pub pdf: PdfAttachmentDto,
}

impl ShippableOrderPlacedDto {
    #[must_use]
    pub fn from_domain(event: &ShippableOrderPlaced) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            shipping_address: AddressDto::from_address(event.shipping_address()),
            shipment_lines: event
                .shipment_lines()
                .iter()
                .map(ShippableOrderLineDto::from_domain)
                .collect(),
            shipping_info: ShippingInfoDto::from_domain(event.shipping_info()),
            pdf: PdfAttachmentDto {
                name: event.pdf().name().to_string(),
                bytes: base64::engine::general_purpose::STANDARD.encode(event.pdf().bytes()),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillableOrderPlacedDto {
    pub order_id: String,
    pub billing_address: AddressDto,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_to_bill: Decimal,
}

impl BillableOrderPlacedDto {
    #[must_use]
    pub fn from_domain(event: &BillableOrderPlaced) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            billing_address: AddressDto::from_address(event.billing_address()),
            amount_to_bill: event.amount_to_bill().value(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAcknowledgmentSentDto {
    pub order_id: String,
    pub email_address: String,
}

impl OrderAcknowledgmentSentDto {
    #[must_use]
    pub fn from_domain(event: &OrderAcknowledgmentSent) -> Self {
        Self {
            order_id: event.order_id().value().to_string(),
            email_address: event.email_address().value().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceOrderEventDto {
    OrderAcknowledgmentSent(OrderAcknowledgmentSentDto),
    ShippableOrderPlaced(ShippableOrderPlacedDto),
    BillableOrderPlaced(BillableOrderPlacedDto),
}

impl PlaceOrderEventDto {
    #[must_use]
    pub fn from_domain(event: &PlaceOrderEvent) -> Self {
        match event {
            PlaceOrderEvent::AcknowledgmentSent(event) => {
                Self::OrderAcknowledgmentSent(OrderAcknowledgmentSentDto::from_domain(event))
            }
            PlaceOrderEvent::ShippableOrderPlaced(event) => {
                Self::ShippableOrderPlaced(ShippableOrderPlacedDto::from_domain(event))
            }
            PlaceOrderEvent::BillableOrderPlaced(event) => {
                Self::BillableOrderPlaced(BillableOrderPlacedDto::from_domain(event))
            }
        }
    }

    #[must_use]
    pub fn from_domain_list(events: &[PlaceOrderEvent]) -> Vec<Self> {
        events.iter().map(Self::from_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::Address;
    use crate::simple_types::{
        BillingAmount, EmailAddress, OrderId, OrderLineId, OrderQuantity, PdfAttachment, Price,
        ProductCode, String50, UsStateCode, ZipCode,
    };
    use crate::workflow::ShippingMethod;
    use rstest::rstest;
    use serde_json::json;

    fn address() -> Address {
        Address::new(
            String50::create("AddressLine1", Some("1 Main St")).unwrap(),
            [Some(String50::create("AddressLine2", Some("Suite 5")).unwrap()), None, None],
            String50::create("City", Some("Reno")).unwrap(),
            ZipCode::create("ZipCode", Some("89501")).unwrap(),
            UsStateCode::create("State", Some("NV")).unwrap(),
            String50::create("Country", Some("US")).unwrap(),
        )
    }

    #[rstest]
    fn billing_event_is_externally_tagged_with_string_amount() {
        let amount = BillingAmount::sum_prices([Price::unchecked(Decimal::new(3050, 2))]).unwrap();
        let event = PlaceOrderEvent::BillableOrderPlaced(BillableOrderPlaced::new(
            OrderId::create("OrderId", Some("42")).unwrap(),
            address(),
            amount,
        ));

        let value = serde_json::to_value(PlaceOrderEventDto::from_domain(&event)).unwrap();

        assert_eq!(value["billableOrderPlaced"]["orderId"], json!("42"));
        assert_eq!(value["billableOrderPlaced"]["amountToBill"], json!("30.50"));
        assert_eq!(
            value["billableOrderPlaced"]["billingAddress"]["addressLine2"],
            json!("Suite 5")
        );
        assert_eq!(value["billableOrderPlaced"]["billingAddress"]["addressLine3"], json!(""));
    }

    #[rstest]
    fn shipping_event_encodes_pdf_and_shipping_info() {
        let code = ProductCode::create("ProductCode", Some("G123")).unwrap();
        let quantity = OrderQuantity::create("Quantity", &code, Some(Decimal::new(25, 1))).unwrap();
        let event = PlaceOrderEvent::ShippableOrderPlaced(ShippableOrderPlaced::new(
            OrderId::create("OrderId", Some("42")).unwrap(),
            address(),
            vec![ShippableOrderLine::new(
                OrderLineId::create("OrderLineId", Some("L1")).unwrap(),
                code,
                quantity,
            )],
            ShippingInfo::new(ShippingMethod::Fedex24, Price::unchecked(Decimal::from(5))),
            PdfAttachment::new("Order42.pdf".to_string(), b"pdf".to_vec()),
        ));

        let value = serde_json::to_value(PlaceOrderEventDto::from_domain(&event)).unwrap();
        let shipped = &value["shippableOrderPlaced"];

        assert_eq!(shipped["shipmentLines"][0]["quantity"], json!("2.5"));
        assert_eq!(shipped["shippingInfo"]["shippingMethod"], json!("Fedex24"));
        assert_eq!(shipped["shippingInfo"]["shippingCost"], json!("5"));
        assert_eq!(shipped["pdf"]["name"], json!("Order42.pdf"));
        assert_eq!(shipped["pdf"]["bytes"], json!("cGRm"));
    }

    #[rstest]
    fn acknowledgment_event_key() {
        let event = PlaceOrderEvent::AcknowledgmentSent(OrderAcknowledgmentSent::new(
            OrderId::create("OrderId", Some("42")).unwrap(),
            EmailAddress::create("EmailAddress", Some("a@b.c")).unwrap(),
        ));

        let value = serde_json::to_value(PlaceOrderEventDto::from_domain_list(&[event])).unwrap();

        assert_eq!(
            value,
            json!([{"orderAcknowledgmentSent": {"orderId": "42", "emailAddress": "a@b.c"}}])
        );
    }
}
