//! Domain events emitted by a successful `PlaceOrder`
//!
//! [`create_events`] always orders them acknowledgment, shipping, billing.

use crate::compound_types::Address;
use crate::simple_types::{
    BillingAmount, EmailAddress, OrderId, OrderLineId, OrderQuantity, PdfAttachment, ProductCode,
};

use super::priced::{PricedOrder, PricedOrderLine, PricedOrderWithShippingMethod, ShippingInfo};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgmentSent {
    order_id: OrderId,
    email_address: EmailAddress,
}

impl OrderAcknowledgmentSent {
    #[must_use]
    pub const fn new(order_id: OrderId, email_address: EmailAddress) -> Self {
        Self {
            order_id,
            email_address,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}

/// One product line as the warehouse sees it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippableOrderLine {
    order_line_id: OrderLineId,
    product_code: ProductCode,
    quantity: OrderQuantity,
}

impl ShippableOrderLine {
    #[must_use]
    pub const fn new(
        order_line_id: OrderLineId,
        product_code: ProductCode,
        quantity: OrderQuantity,
    ) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
        }
    }

    #[must_use]
    pub const fn order_line_id(&self) -> &OrderLineId {
        &self.order_line_id
    }

    #[must_use]
    pub const fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    #[must_use]
    pub const fn quantity(&self) -> &OrderQuantity {
        &self.quantity
    }
}

/// Sent to the shipping context
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShippableOrderPlaced {
    order_id: OrderId,
    shipping_address: Address,
    shipment_lines: Vec<ShippableOrderLine>,
    shipping_info: ShippingInfo,
    pdf: PdfAttachment,
}

impl ShippableOrderPlaced {
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        shipping_address: Address,
        shipment_lines: Vec<ShippableOrderLine>,
        shipping_info: ShippingInfo,
        pdf: PdfAttachment,
    ) -> Self {
        Self {
            order_id,
            shipping_address,
            shipment_lines,
            shipping_info,
            pdf,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    #[must_use]
    pub fn shipment_lines(&self) -> &[ShippableOrderLine] {
        &self.shipment_lines
    }

    #[must_use]
    pub const fn shipping_info(&self) -> &ShippingInfo {
        &self.shipping_info
    }

    #[must_use]
    pub const fn pdf(&self) -> &PdfAttachment {
        &self.pdf
    }
}

/// Sent to the billing context
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillableOrderPlaced {
    order_id: OrderId,
    billing_address: Address,
    amount_to_bill: BillingAmount,
}

impl BillableOrderPlaced {
    #[must_use]
    pub const fn new(order_id: OrderId, billing_address: Address, amount_to_bill: BillingAmount) -> Self {
        Self {
            order_id,
            billing_address,
            amount_to_bill,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    #[must_use]
    pub const fn amount_to_bill(&self) -> BillingAmount {
        self.amount_to_bill
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceOrderEvent {
    AcknowledgmentSent(OrderAcknowledgmentSent),
    ShippableOrderPlaced(ShippableOrderPlaced),
    BillableOrderPlaced(BillableOrderPlaced),
}

/// `None` for comment lines
#[must_use]
pub fn make_shipment_line(line: &PricedOrderLine) -> Option<ShippableOrderLine> {
    line.as_product_line().map(|product_line| {
        ShippableOrderLine::new(
            product_line.order_line_id().clone(),
            product_line.product_code().clone(),
            *product_line.quantity(),
        )
    })
}

#[must_use]
pub fn create_shipping_event(order: &PricedOrderWithShippingMethod) -> ShippableOrderPlaced {
    let priced_order = order.priced_order();
    let shipment_lines = priced_order
        .lines()
        .iter()
        .filter_map(make_shipment_line)
        .collect();
    let pdf = PdfAttachment::new(format!("Order{}.pdf", priced_order.order_id()), Vec::new());

    ShippableOrderPlaced::new(
        priced_order.order_id().clone(),
        priced_order.shipping_address().clone(),
        shipment_lines,
        *order.shipping_info(),
        pdf,
    )
}

/// `None` unless there is something to bill
#[must_use]
pub fn create_billing_event(priced_order: &PricedOrder) -> Option<BillableOrderPlaced> {
    priced_order.amount_to_bill().is_positive().then(|| {
        BillableOrderPlaced::new(
            priced_order.order_id().clone(),
            priced_order.billing_address().clone(),
            priced_order.amount_to_bill(),
        )
    })
}

#[must_use]
pub fn create_events(
    order: &PricedOrderWithShippingMethod,
    acknowledgment_event: Option<OrderAcknowledgmentSent>,
) -> Vec<PlaceOrderEvent> {
    let acknowledgment_events = acknowledgment_event.map(PlaceOrderEvent::AcknowledgmentSent);
    let shipping_event = PlaceOrderEvent::ShippableOrderPlaced(create_shipping_event(order));
    let billing_events =
        create_billing_event(order.priced_order()).map(PlaceOrderEvent::BillableOrderPlaced);

    acknowledgment_events
        .into_iter()
        .chain(std::iter::once(shipping_event))
        .chain(billing_events)
        .collect()
}
