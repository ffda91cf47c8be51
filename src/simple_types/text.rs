//! Bounded and pattern-constrained string types

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::constrained;
use super::error::ConstraintError;

/// Generates a newtype over `String` bounded to `max` characters
macro_rules! bounded_string {
    ($(#[$meta:meta])* $name:ident, $max:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters
            pub const MAX_LENGTH: usize = $max;

            /// Validates `value` and wraps it
            ///
            /// # Errors
            ///
            /// Returns [`ConstraintError`] when the value is absent, empty, or too long.
            pub fn create(field_name: &str, value: Option<&str>) -> Result<Self, ConstraintError> {
                constrained::create_string(field_name, Self, Self::MAX_LENGTH, value)
            }

            /// Returns the wrapped string
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(&self.0)
            }
        }
    };
}

/// Generates a newtype over `String` that must match an anchored pattern
macro_rules! pattern_string {
    ($(#[$meta:meta])* $name:ident, $pattern:ident, $regex:expr) => {
        static $pattern: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($regex).expect(concat!("invalid ", stringify!($name), " pattern")));

        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Validates `value` against the pattern and wraps it
            ///
            /// # Errors
            ///
            /// Returns [`ConstraintError`] when the value is absent, empty, or
            /// does not match the pattern.
            pub fn create(field_name: &str, value: Option<&str>) -> Result<Self, ConstraintError> {
                constrained::create_like(field_name, Self, &$pattern, value)
            }

            /// Returns the wrapped string
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(&self.0)
            }
        }
    };
}

bounded_string!(
    /// Non-empty string of at most 50 characters
    ///
    /// Used for names and address parts.
    ///
    /// ```
    /// use order_taking::simple_types::String50;
    ///
    /// let city = String50::create("City", Some("Portland")).unwrap();
    /// assert_eq!(city.value(), "Portland");
    /// assert!(String50::create("City", Some(&"x".repeat(51))).is_err());
    /// ```
    String50,
    50
);

bounded_string!(
    /// Identifier of an order
    OrderId,
    50
);

bounded_string!(
    /// Identifier of a single line within an order
    OrderLineId,
    50
);

bounded_string!(
    /// Code of a promotion applied at pricing time
    PromotionCode,
    30
);

impl String50 {
    /// Validates an optional field: absent or empty becomes `None`
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when a present value is longer than 50 characters.
    pub fn create_option(field_name: &str, value: Option<&str>) -> Result<Option<Self>, ConstraintError> {
        constrained::create_string_option(field_name, Self, Self::MAX_LENGTH, value)
    }
}

pattern_string!(
    /// Email address; only the presence of an `@` between two parts is checked
    EmailAddress,
    EMAIL_PATTERN,
    r"^.+@.+$"
);

pattern_string!(
    /// Five-digit US zip code
    ZipCode,
    ZIP_CODE_PATTERN,
    r"^[0-9]{5}$"
);

pattern_string!(
    /// Two-letter US state code (the 50 states plus DC)
    ///
    /// ```
    /// use order_taking::simple_types::UsStateCode;
    ///
    /// assert!(UsStateCode::create("State", Some("OR")).is_ok());
    /// assert!(UsStateCode::create("State", Some("or")).is_err());
    /// assert!(UsStateCode::create("State", Some("XX")).is_err());
    /// ```
    UsStateCode,
    US_STATE_CODE_PATTERN,
    r"^(A[KLRZ]|C[AOT]|D[CE]|FL|GA|HI|I[ADLN]|K[SY]|LA|M[ADEINOST]|N[CDEHJMVY]|O[HKR]|P[AR]|RI|S[CD]|T[NX]|UT|V[AIT]|W[AIVY])$"
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn promotion_code_is_bounded_to_thirty() {
        assert!(PromotionCode::create("PromotionCode", Some(&"P".repeat(30))).is_ok());

        let error = PromotionCode::create("PromotionCode", Some(&"P".repeat(31))).unwrap_err();
        assert_eq!(error.message(), "PromotionCode must be less than 30");
    }

    #[rstest]
    fn order_id_rejects_absent() {
        let error = OrderId::create("OrderId", None).unwrap_err();

        assert_eq!(error.message(), "OrderId must not be empty or undefined");
    }

    #[rstest]
    fn string50_option_accepts_absent() {
        assert_eq!(String50::create_option("AddressLine2", None), Ok(None));
        assert_eq!(
            String50::create_option("AddressLine2", Some("Apt 4"))
                .unwrap()
                .map(|line| line.value().to_string()),
            Some("Apt 4".to_string())
        );
    }

    #[rstest]
    #[case("a@b")]
    #[case("first.last@example.com")]
    fn email_accepts_at_sign(#[case] value: &str) {
        assert_eq!(EmailAddress::create("EmailAddress", Some(value)).unwrap().value(), value);
    }

    #[rstest]
    #[case("example.com")]
    #[case("@example.com")]
    #[case("user@")]
    fn email_rejects_missing_parts(#[case] value: &str) {
        let error = EmailAddress::create("EmailAddress", Some(value)).unwrap_err();

        assert_eq!(error.message(), "EmailAddress does not match pattern ^.+@.+$");
    }

    #[rstest]
    #[case("1234")]
    #[case("123456")]
    #[case("1234a")]
    #[case("٩٠٢١٠")]
    #[case("９０２１０")]
    fn zip_code_requires_exactly_five_digits(#[case] value: &str) {
        let error = ZipCode::create("ZipCode", Some(value)).unwrap_err();

        assert_eq!(error.message(), r"ZipCode does not match pattern ^[0-9]{5}$");
    }

    #[rstest]
    #[case("CA")]
    #[case("DC")]
    #[case("WY")]
    fn state_code_accepts_known_states(#[case] value: &str) {
        assert!(UsStateCode::create("State", Some(value)).is_ok());
    }

    #[rstest]
    #[case("ZZ")]
    #[case("CAL")]
    #[case("US")]
    fn state_code_rejects_unknown(#[case] value: &str) {
        assert!(UsStateCode::create("State", Some(value)).is_err());
    }

    #[rstest]
    fn display_writes_raw_value() {
        let order_id = OrderId::create("OrderId", Some("ORD-1")).unwrap();

        assert_eq!(format!("Order{order_id}.pdf"), "OrderORD-1.pdf");
    }
}
