//! Customer tier and document attachments

use super::error::ConstraintError;

/// Customer tier; VIP customers ship for free
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VipStatus {
    #[default]
    Normal,
    Vip,
}

impl VipStatus {
    /// Parses `normal` / `vip`, ignoring case
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError`] when the value is absent or any other
    /// word. An empty string counts as another word.
    pub fn create(field_name: &str, value: Option<&str>) -> Result<Self, ConstraintError> {
        let raw = value
            .ok_or_else(|| ConstraintError::new(field_name, format!("{field_name} is undefined")))?;

        match raw.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "vip" => Ok(Self::Vip),
            _ => Err(ConstraintError::new(
                field_name,
                format!("{field_name} can be either (normal, vip)"),
            )),
        }
    }

    /// Canonical lower-case spelling
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Vip => "vip",
        }
    }
}

/// Named binary document attached to an event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfAttachment {
    name: String,
    bytes: Vec<u8>,
}

impl PdfAttachment {
    #[must_use]
    pub const fn new(name: String, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("normal", VipStatus::Normal)]
    #[case("Normal", VipStatus::Normal)]
    #[case("VIP", VipStatus::Vip)]
    #[case("vip", VipStatus::Vip)]
    fn parses_known_tiers(#[case] raw: &str, #[case] expected: VipStatus) {
        assert_eq!(VipStatus::create("VipStatus", Some(raw)), Ok(expected));
    }

    #[rstest]
    #[case("gold")]
    #[case("")]
    fn rejects_unknown_tier(#[case] raw: &str) {
        let error = VipStatus::create("VipStatus", Some(raw)).unwrap_err();

        assert_eq!(error.message(), "VipStatus can be either (normal, vip)");
    }

    #[rstest]
    fn rejects_missing_tier() {
        let error = VipStatus::create("VipStatus", None).unwrap_err();

        assert_eq!(error.message(), "VipStatus is undefined");
    }

    #[rstest]
    fn attachment_exposes_parts() {
        let pdf = PdfAttachment::new("OrderA1.pdf".to_string(), vec![1, 2]);

        assert_eq!(pdf.name(), "OrderA1.pdf");
        assert_eq!(pdf.bytes(), &[1, 2]);
    }
}
