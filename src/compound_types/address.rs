use crate::simple_types::{String50, UsStateCode, ZipCode};

/// Postal address that has passed every field constraint
///
/// The three secondary lines are optional and stay `None` when the raw
/// input left them out.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    address_line1: String50,
    secondary_lines: [Option<String50>; 3],
    city: String50,
    zip_code: ZipCode,
    state: UsStateCode,
    country: String50,
}

impl Address {
    #[must_use]
    pub const fn new(
        address_line1: String50,
        secondary_lines: [Option<String50>; 3],
        city: String50,
        zip_code: ZipCode,
        state: UsStateCode,
        country: String50,
    ) -> Self {
        Self {
            address_line1,
            secondary_lines,
            city,
            zip_code,
            state,
            country,
        }
    }

    #[must_use]
    pub const fn address_line1(&self) -> &String50 {
        &self.address_line1
    }

    #[must_use]
    pub const fn address_line2(&self) -> Option<&String50> {
        self.secondary_lines[0].as_ref()
    }

    #[must_use]
    pub const fn address_line3(&self) -> Option<&String50> {
        self.secondary_lines[1].as_ref()
    }

    #[must_use]
    pub const fn address_line4(&self) -> Option<&String50> {
        self.secondary_lines[2].as_ref()
    }

    #[must_use]
    pub const fn city(&self) -> &String50 {
        &self.city
    }

    #[must_use]
    pub const fn zip_code(&self) -> &ZipCode {
        &self.zip_code
    }

    #[must_use]
    pub const fn state(&self) -> &UsStateCode {
        &self.state
    }

    #[must_use]
    pub const fn country(&self) -> &String50 {
        &self.country
    }
}
