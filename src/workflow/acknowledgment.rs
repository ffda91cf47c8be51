//! Acknowledgment stage

use crate::simple_types::EmailAddress;

use super::events::OrderAcknowledgmentSent;
use super::priced::PricedOrderWithShippingMethod;

/// Rendered HTML content of an acknowledgment letter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlString(String);

impl HtmlString {
    #[must_use]
    pub const fn new(html: String) -> Self {
        Self(html)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Letter to send and its recipient
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderAcknowledgment {
    email_address: EmailAddress,
    letter: HtmlString,
}

impl OrderAcknowledgment {
    #[must_use]
    pub const fn new(email_address: EmailAddress, letter: HtmlString) -> Self {
        Self {
            email_address,
            letter,
        }
    }

    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    #[must_use]
    pub const fn letter(&self) -> &HtmlString {
        &self.letter
    }
}

/// Outcome reported by the acknowledgment sender
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendResult {
    Sent,
    NotSent,
}

/// Renders and sends the acknowledgment letter
///
/// Returns the event only when the sender reports [`SendResult::Sent`]; a
/// letter that was not sent is not an error.
pub fn acknowledge_order<CreateLetter, SendAcknowledgment>(
    create_acknowledgment_letter: &CreateLetter,
    send_acknowledgment: &SendAcknowledgment,
    order: &PricedOrderWithShippingMethod,
) -> Option<OrderAcknowledgmentSent>
where
    CreateLetter: Fn(&PricedOrderWithShippingMethod) -> HtmlString + ?Sized,
    SendAcknowledgment: Fn(&OrderAcknowledgment) -> SendResult + ?Sized,
{
    let priced_order = order.priced_order();
    let letter = create_acknowledgment_letter(order);
    let acknowledgment =
        OrderAcknowledgment::new(priced_order.customer_info().email_address().clone(), letter);

    match send_acknowledgment(&acknowledgment) {
        SendResult::Sent => Some(OrderAcknowledgmentSent::new(
            priced_order.order_id().clone(),
            acknowledgment.email_address,
        )),
        SendResult::NotSent => {
            tracing::info!(
                order_id = %priced_order.order_id(),
                "acknowledgment was not sent"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::{Address, CustomerInfo, PersonalName};
    use crate::simple_types::{
        BillingAmount, OrderId, Price, String50, UsStateCode, VipStatus, ZipCode,
    };
    use crate::workflow::{PricedOrder, PricingMethod, ShippingInfo, ShippingMethod};
    use rstest::{fixture, rstest};
    use std::cell::RefCell;

    #[fixture]
    fn order() -> PricedOrderWithShippingMethod {
        let address = Address::new(
            String50::create("AddressLine1", Some("1 Main St")).unwrap(),
            [None, None, None],
            String50::create("City", Some("Reno")).unwrap(),
            ZipCode::create("ZipCode", Some("89501")).unwrap(),
            UsStateCode::create("State", Some("NV")).unwrap(),
            String50::create("Country", Some("US")).unwrap(),
        );
        let priced_order = PricedOrder::new(
            OrderId::create("OrderId", Some("ORD-9")).unwrap(),
            CustomerInfo::new(
                PersonalName::new(
                    String50::create("FirstName", Some("Barbara")).unwrap(),
                    String50::create("LastName", Some("Liskov")).unwrap(),
                ),
                EmailAddress::create("EmailAddress", Some("barbara@example.com")).unwrap(),
                VipStatus::Normal,
            ),
            address.clone(),
            address,
            BillingAmount::sum_prices(std::iter::empty::<Price>()).unwrap(),
            Vec::new(),
            PricingMethod::Standard,
        );
        PricedOrderWithShippingMethod::new(
            ShippingInfo::new(ShippingMethod::Fedex24, Price::zero()),
            priced_order,
        )
    }

    fn letter(order: &PricedOrderWithShippingMethod) -> HtmlString {
        HtmlString::new(format!("<p>{}</p>", order.priced_order().order_id()))
    }

    #[rstest]
    fn sent_letter_produces_event(order: PricedOrderWithShippingMethod) {
        let outbox = RefCell::new(Vec::new());
        let send = |acknowledgment: &OrderAcknowledgment| {
            outbox.borrow_mut().push(acknowledgment.clone());
            SendResult::Sent
        };

        let event = acknowledge_order(&letter, &send, &order).unwrap();

        assert_eq!(event.order_id().value(), "ORD-9");
        assert_eq!(event.email_address().value(), "barbara@example.com");
        let outbox = outbox.into_inner();
        assert_eq!(outbox.len(), 1);
        assert_eq!(outbox[0].letter().value(), "<p>ORD-9</p>");
    }

    #[rstest]
    fn unsent_letter_produces_nothing(order: PricedOrderWithShippingMethod) {
        let send = |_: &OrderAcknowledgment| SendResult::NotSent;

        assert!(acknowledge_order(&letter, &send, &order).is_none());
    }
}
