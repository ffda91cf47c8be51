//! Validation stage: `UnvalidatedOrder` to `ValidatedOrder`
//!
//! Each helper turns one raw section of the order into its domain type and
//! reports the first broken constraint as a [`ValidationError`].

use std::future::Future;

use futures::future;
use rust_decimal::Decimal;

use crate::compound_types::{Address, CustomerInfo, PersonalName};
use crate::simple_types::{
    EmailAddress, OrderId, OrderLineId, OrderQuantity, ProductCode, PromotionCode, String50,
    UsStateCode, VipStatus, ZipCode,
};

use super::errors::ValidationError;
use super::input::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};
use super::validated::{
    AddressValidationError, CheckedAddress, PricingMethod, ValidatedOrder, ValidatedOrderLine,
};

/// # Errors
///
/// Returns [`ValidationError`] when the id is absent, empty or longer than 50.
pub fn to_order_id(order_id: Option<&str>) -> Result<OrderId, ValidationError> {
    Ok(OrderId::create("OrderId", order_id)?)
}

/// # Errors
///
/// Returns [`ValidationError`] when the id is absent, empty or longer than 50.
pub fn to_order_line_id(order_line_id: Option<&str>) -> Result<OrderLineId, ValidationError> {
    Ok(OrderLineId::create("OrderLineId", order_line_id)?)
}

/// Validates name, email and VIP status, in that order
///
/// # Errors
///
/// Returns [`ValidationError`] for the first field that breaks its constraint.
pub fn to_customer_info(
    customer_info: &UnvalidatedCustomerInfo,
) -> Result<CustomerInfo, ValidationError> {
    let first_name = String50::create("FirstName", customer_info.first_name.as_deref())?;
    let last_name = String50::create("LastName", customer_info.last_name.as_deref())?;
    let email_address =
        EmailAddress::create("EmailAddress", customer_info.email_address.as_deref())?;
    let vip_status = VipStatus::create("VipStatus", customer_info.vip_status.as_deref())?;

    Ok(CustomerInfo::new(
        PersonalName::new(first_name, last_name),
        email_address,
        vip_status,
    ))
}

/// Re-validates a checked address into the strict [`Address`] shape
///
/// # Errors
///
/// Returns [`ValidationError`] for the first field that breaks its constraint.
pub fn to_address(checked_address: &CheckedAddress) -> Result<Address, ValidationError> {
    let raw = checked_address.address();

    let address_line1 = String50::create("AddressLine1", raw.address_line1.as_deref())?;
    let address_line2 = String50::create_option("AddressLine2", raw.address_line2.as_deref())?;
    let address_line3 = String50::create_option("AddressLine3", raw.address_line3.as_deref())?;
    let address_line4 = String50::create_option("AddressLine4", raw.address_line4.as_deref())?;
    let city = String50::create("City", raw.city.as_deref())?;
    let zip_code = ZipCode::create("ZipCode", raw.zip_code.as_deref())?;
    let state = UsStateCode::create("State", raw.state.as_deref())?;
    let country = String50::create("Country", raw.country.as_deref())?;

    Ok(Address::new(
        address_line1,
        [address_line2, address_line3, address_line4],
        city,
        zip_code,
        state,
        country,
    ))
}

/// Runs the address checker and maps its refusal into the domain error
///
/// # Errors
///
/// Returns `ValidationError("Address not found")` or
/// `ValidationError("Address has bad format")`.
pub async fn to_checked_address<CheckAddress, Fut>(
    check_address_exists: &CheckAddress,
    address: UnvalidatedAddress,
) -> Result<CheckedAddress, ValidationError>
where
    CheckAddress: Fn(UnvalidatedAddress) -> Fut + ?Sized,
    Fut: Future<Output = Result<CheckedAddress, AddressValidationError>>,
{
    check_address_exists(address).await.map_err(|error| match error {
        AddressValidationError::AddressNotFound => ValidationError::new("Address not found"),
        AddressValidationError::InvalidFormat => ValidationError::new("Address has bad format"),
    })
}

/// Validates the code's format, then asks the product catalog whether it exists
///
/// # Errors
///
/// Returns [`ValidationError`] when the code is malformed, or
/// `ValidationError("Invalid: <code>")` when no such product exists.
pub fn to_product_code<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    product_code: Option<&str>,
) -> Result<ProductCode, ValidationError>
where
    CheckProduct: Fn(&ProductCode) -> bool + ?Sized,
{
    let product_code = ProductCode::create("ProductCode", product_code)?;

    if check_product_code_exists(&product_code) {
        Ok(product_code)
    } else {
        Err(ValidationError::new(format!("Invalid: {product_code}")))
    }
}

/// # Errors
///
/// Returns [`ValidationError`] when the quantity breaks the rules of the
/// product's unit kind.
pub fn to_order_quantity(
    product_code: &ProductCode,
    quantity: Option<Decimal>,
) -> Result<OrderQuantity, ValidationError> {
    Ok(OrderQuantity::create("Quantity", product_code, quantity)?)
}

/// # Errors
///
/// Returns [`ValidationError`] for the first failing part of the line:
/// line id, product code, product existence, then quantity.
pub fn to_validated_order_line<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    line: &UnvalidatedOrderLine,
) -> Result<ValidatedOrderLine, ValidationError>
where
    CheckProduct: Fn(&ProductCode) -> bool + ?Sized,
{
    let order_line_id = to_order_line_id(line.order_line_id.as_deref())?;
    let product_code = to_product_code(check_product_code_exists, line.product_code.as_deref())?;
    let quantity = to_order_quantity(&product_code, line.quantity)?;

    Ok(ValidatedOrderLine::create(
        order_line_id,
        product_code,
        quantity,
    )?)
}

/// Absent or empty promotion code means standard pricing
///
/// # Errors
///
/// Returns [`ValidationError`] when the code is longer than 30.
///
/// # Examples
///
/// ```
/// use order_taking::workflow::{create_pricing_method, PricingMethod};
///
/// assert_eq!(create_pricing_method(None).unwrap(), PricingMethod::Standard);
/// assert_eq!(create_pricing_method(Some("")).unwrap(), PricingMethod::Standard);
/// assert!(matches!(
///     create_pricing_method(Some("HALF")).unwrap(),
///     PricingMethod::Promotion(code) if code.value() == "HALF"
/// ));
/// ```
pub fn create_pricing_method(promotion_code: Option<&str>) -> Result<PricingMethod, ValidationError> {
    match promotion_code {
        None | Some("") => Ok(PricingMethod::Standard),
        Some(code) => Ok(PricingMethod::Promotion(PromotionCode::create(
            "PromotionCode",
            Some(code),
        )?)),
    }
}

/// Validates a whole order
///
/// Both addresses are checked concurrently; every other step runs in order
/// and the first failure wins.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first invalid field.
pub async fn validate_order<CheckProduct, CheckAddress, Fut>(
    check_product_code_exists: &CheckProduct,
    check_address_exists: &CheckAddress,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<ValidatedOrder, ValidationError>
where
    CheckProduct: Fn(&ProductCode) -> bool + ?Sized,
    CheckAddress: Fn(UnvalidatedAddress) -> Fut + ?Sized,
    Fut: Future<Output = Result<CheckedAddress, AddressValidationError>>,
{
    let order_id = to_order_id(unvalidated_order.order_id.as_deref())?;
    let customer_info = to_customer_info(&unvalidated_order.customer_info)?;

    let (checked_shipping_address, checked_billing_address) = future::join(
        to_checked_address(
            check_address_exists,
            unvalidated_order.shipping_address.clone(),
        ),
        to_checked_address(
            check_address_exists,
            unvalidated_order.billing_address.clone(),
        ),
    )
    .await;
    let shipping_address = to_address(&checked_shipping_address?)?;
    let billing_address = to_address(&checked_billing_address?)?;

    let lines = unvalidated_order
        .lines
        .iter()
        .map(|line| to_validated_order_line(check_product_code_exists, line))
        .collect::<Result<Vec<_>, _>>()?;

    let pricing_method = create_pricing_method(unvalidated_order.promotion_code.as_deref())?;

    Ok(ValidatedOrder::new(
        order_id,
        customer_info,
        shipping_address,
        billing_address,
        lines,
        pricing_method,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::future::{Ready, ready};

    type CheckResult = Ready<Result<CheckedAddress, AddressValidationError>>;

    fn accept_address(address: UnvalidatedAddress) -> CheckResult {
        ready(Ok(CheckedAddress::new(address)))
    }

    fn all_products_exist(_: &ProductCode) -> bool {
        true
    }

    #[fixture]
    fn address() -> UnvalidatedAddress {
        UnvalidatedAddress {
            address_line1: Some("1 Infinite Loop".to_string()),
            city: Some("Cupertino".to_string()),
            zip_code: Some("95014".to_string()),
            state: Some("CA".to_string()),
            country: Some("US".to_string()),
            ..UnvalidatedAddress::default()
        }
    }

    #[fixture]
    fn order(address: UnvalidatedAddress) -> UnvalidatedOrder {
        UnvalidatedOrder {
            order_id: Some("ORD-1".to_string()),
            customer_info: UnvalidatedCustomerInfo {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                email_address: Some("ada@example.com".to_string()),
                vip_status: Some("normal".to_string()),
            },
            shipping_address: address.clone(),
            billing_address: address,
            lines: vec![UnvalidatedOrderLine {
                order_line_id: Some("L1".to_string()),
                product_code: Some("W1234".to_string()),
                quantity: Some(Decimal::from(3)),
            }],
            promotion_code: None,
        }
    }

    #[rstest]
    fn to_address_keeps_absent_secondary_lines(address: UnvalidatedAddress) {
        let validated = to_address(&CheckedAddress::new(address)).unwrap();

        assert_eq!(validated.address_line1().value(), "1 Infinite Loop");
        assert!(validated.address_line2().is_none());
        assert!(validated.address_line4().is_none());
    }

    #[rstest]
    fn to_address_validates_each_secondary_line_separately(mut address: UnvalidatedAddress) {
        address.address_line2 = Some("Building 2".to_string());
        address.address_line4 = Some("x".repeat(51));

        let error = to_address(&CheckedAddress::new(address)).unwrap_err();

        assert_eq!(error.message(), "AddressLine4 must be less than 50");
    }

    #[rstest]
    #[case(Some("W9999"), true, Ok("W9999"))]
    #[case(Some("W9999"), false, Err("Invalid: W9999"))]
    #[case(Some("X123"), true, Err("ProductCode format not recognized 'X123'"))]
    #[case(None, true, Err("ProductCode must not be empty or undefined"))]
    fn product_code_checks_format_then_existence(
        #[case] raw: Option<&str>,
        #[case] exists: bool,
        #[case] expected: Result<&str, &str>,
    ) {
        let result = to_product_code(&|_: &ProductCode| exists, raw);

        match expected {
            Ok(code) => assert_eq!(result.unwrap().value(), code),
            Err(message) => assert_eq!(result.unwrap_err().message(), message),
        }
    }

    #[rstest]
    fn customer_info_reports_last_name_by_its_own_field() {
        let info = UnvalidatedCustomerInfo {
            first_name: Some("Ada".to_string()),
            last_name: None,
            email_address: Some("ada@example.com".to_string()),
            vip_status: Some("vip".to_string()),
        };

        let error = to_customer_info(&info).unwrap_err();

        assert_eq!(error.message(), "LastName must not be empty or undefined");
    }

    #[rstest]
    fn pricing_method_rejects_long_codes() {
        let error = create_pricing_method(Some(&"P".repeat(31))).unwrap_err();

        assert_eq!(error.message(), "PromotionCode must be less than 30");
    }

    #[rstest]
    #[tokio::test]
    async fn validates_a_complete_order(order: UnvalidatedOrder) {
        let validated = validate_order(&all_products_exist, &accept_address, &order)
            .await
            .unwrap();

        assert_eq!(validated.order_id().value(), "ORD-1");
        assert_eq!(validated.lines().len(), 1);
        assert_eq!(validated.pricing_method(), &PricingMethod::Standard);
        assert!(!validated.customer_info().is_vip());
    }

    #[rstest]
    #[case(AddressValidationError::AddressNotFound, "Address not found")]
    #[case(AddressValidationError::InvalidFormat, "Address has bad format")]
    #[tokio::test]
    async fn address_checker_failures_become_validation_errors(
        order: UnvalidatedOrder,
        #[case] failure: AddressValidationError,
        #[case] message: &str,
    ) {
        let reject = move |_: UnvalidatedAddress| ready(Err(failure));

        let error = validate_order(&all_products_exist, &reject, &order)
            .await
            .unwrap_err();

        assert_eq!(error.message(), message);
    }

    #[rstest]
    #[tokio::test]
    async fn order_id_is_checked_before_everything_else(mut order: UnvalidatedOrder) {
        order.order_id = None;
        order.customer_info.email_address = Some("not-an-email".to_string());

        let error = validate_order(&all_products_exist, &accept_address, &order)
            .await
            .unwrap_err();

        assert_eq!(error.message(), "OrderId must not be empty or undefined");
    }

    #[rstest]
    #[tokio::test]
    async fn gizmo_quantity_must_be_in_kilograms_range(mut order: UnvalidatedOrder) {
        order.lines[0].product_code = Some("G123".to_string());
        order.lines[0].quantity = Some(Decimal::new(10_005, 1));

        let error = validate_order(&all_products_exist, &accept_address, &order)
            .await
            .unwrap_err();

        assert_eq!(error.message(), "Quantity should be between 0 and 1000");
    }

    #[rstest]
    #[tokio::test]
    async fn order_without_lines_is_valid(mut order: UnvalidatedOrder) {
        order.lines.clear();

        let validated = validate_order(&all_products_exist, &accept_address, &order)
            .await
            .unwrap();

        assert!(validated.lines().is_empty());
    }
}
