//! Generic smart-constructor helpers
//!
//! Every constrained primitive in this crate is built through one of the
//! helpers below. Each takes the field name used in error messages, a
//! constructor for the wrapper type and the raw (possibly absent) value, and
//! either wraps the value or reports the first rule it breaks.
//!
//! | Family | Rules, in order |
//! |---|---|
//! | [`create_string`] | present and non-empty, at most `max_length` chars |
//! | [`create_string_option`] | absent/empty is `None`, otherwise at most `max_length` chars |
//! | [`create_like`] | present and non-empty, whole value matches the pattern |
//! | [`create_integer`] | present, inside `[min, max]`, whole number |
//! | [`create_decimal`] | present, inside `[min, max]` |

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::ConstraintError;

fn empty_error(field_name: &str) -> ConstraintError {
    ConstraintError::new(
        field_name,
        format!("{field_name} must not be empty or undefined"),
    )
}

fn undefined_error(field_name: &str) -> ConstraintError {
    ConstraintError::new(field_name, format!("{field_name} must not be undefined"))
}

fn range_error<N: std::fmt::Display>(field_name: &str, min_value: N, max_value: N) -> ConstraintError {
    ConstraintError::new(
        field_name,
        format!("{field_name} should be between {min_value} and {max_value}"),
    )
}

fn non_empty<'a>(field_name: &str, value: Option<&'a str>) -> Result<&'a str, ConstraintError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(empty_error(field_name)),
    }
}

fn check_length(field_name: &str, max_length: usize, value: &str) -> Result<(), ConstraintError> {
    if value.chars().count() > max_length {
        Err(ConstraintError::new(
            field_name,
            format!("{field_name} must be less than {max_length}"),
        ))
    } else {
        Ok(())
    }
}

/// Creates a non-empty string type bounded by `max_length` characters
///
/// # Errors
///
/// Returns [`ConstraintError`] when the value is absent, empty, or longer
/// than `max_length` characters.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::constrained::create_string;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// assert_eq!(create_string("Name", Name, 5, Some("Ann")), Ok(Name("Ann".into())));
/// assert_eq!(
///     create_string("Name", Name, 5, None).unwrap_err().message(),
///     "Name must not be empty or undefined"
/// );
/// assert_eq!(
///     create_string("Name", Name, 5, Some("Annabel")).unwrap_err().message(),
///     "Name must be less than 5"
/// );
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: Option<&str>,
) -> Result<T, ConstraintError>
where
    F: FnOnce(String) -> T,
{
    let text = non_empty(field_name, value)?;
    check_length(field_name, max_length, text)?;
    Ok(constructor(text.to_string()))
}

/// Like [`create_string`], but absent or empty input is a legal `None`
///
/// # Errors
///
/// Returns [`ConstraintError`] when a present value exceeds `max_length`.
pub fn create_string_option<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: Option<&str>,
) -> Result<Option<T>, ConstraintError>
where
    F: FnOnce(String) -> T,
{
    match value {
        None | Some("") => Ok(None),
        Some(text) => {
            check_length(field_name, max_length, text)?;
            Ok(Some(constructor(text.to_string())))
        }
    }
}

/// Creates a string type whose value must match `pattern`
///
/// The pattern is expected to be anchored; an unanchored pattern accepts
/// any value that merely contains a match.
///
/// # Errors
///
/// Returns [`ConstraintError`] when the value is absent, empty, or does not
/// match the pattern.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: Option<&str>,
) -> Result<T, ConstraintError>
where
    F: FnOnce(String) -> T,
{
    let text = non_empty(field_name, value)?;
    if pattern.is_match(text) {
        Ok(constructor(text.to_string()))
    } else {
        Err(ConstraintError::new(
            field_name,
            format!("{field_name} does not match pattern {}", pattern.as_str()),
        ))
    }
}

/// Creates a whole-number type within `[min_value, max_value]`
///
/// The raw value arrives as a decimal so that a fractional input can be
/// reported instead of silently truncated. The range is checked before
/// wholeness.
///
/// # Errors
///
/// Returns [`ConstraintError`] when the value is absent, out of range or
/// has a fractional part.
pub fn create_integer<T, F>(
    field_name: &str,
    constructor: F,
    min_value: u32,
    max_value: u32,
    value: Option<Decimal>,
) -> Result<T, ConstraintError>
where
    F: FnOnce(u32) -> T,
{
    let number = value.ok_or_else(|| undefined_error(field_name))?;

    if number < Decimal::from(min_value) || number > Decimal::from(max_value) {
        return Err(range_error(field_name, min_value, max_value));
    }

    let integer_error = || ConstraintError::new(field_name, format!("{field_name} should be integer"));
    if !number.fract().is_zero() {
        return Err(integer_error());
    }

    number.to_u32().map(constructor).ok_or_else(integer_error)
}

/// Creates a decimal type within `[min_value, max_value]`
///
/// # Errors
///
/// Returns [`ConstraintError`] when the value is absent or out of range.
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Option<Decimal>,
) -> Result<T, ConstraintError>
where
    F: FnOnce(Decimal) -> T,
{
    let number = value.ok_or_else(|| undefined_error(field_name))?;

    if number < min_value || number > max_value {
        Err(range_error(field_name, min_value, max_value))
    } else {
        Ok(constructor(number))
    }
}
