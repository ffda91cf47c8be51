use crate::simple_types::{EmailAddress, String50, VipStatus};

/// First and last name of a customer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PersonalName {
    first_name: String50,
    last_name: String50,
}

impl PersonalName {
    #[must_use]
    pub const fn new(first_name: String50, last_name: String50) -> Self {
        Self {
            first_name,
            last_name,
        }
    }

    #[must_use]
    pub const fn first_name(&self) -> &String50 {
        &self.first_name
    }

    #[must_use]
    pub const fn last_name(&self) -> &String50 {
        &self.last_name
    }
}

/// Who placed the order and how to reach them
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CustomerInfo {
    name: PersonalName,
    email_address: EmailAddress,
    vip_status: VipStatus,
}

impl CustomerInfo {
    #[must_use]
    pub const fn new(name: PersonalName, email_address: EmailAddress, vip_status: VipStatus) -> Self {
        Self {
            name,
            email_address,
            vip_status,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &PersonalName {
        &self.name
    }

    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    #[must_use]
    pub const fn vip_status(&self) -> VipStatus {
        self.vip_status
    }

    #[must_use]
    pub const fn is_vip(&self) -> bool {
        matches!(self.vip_status, VipStatus::Vip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn customer(status: VipStatus) -> CustomerInfo {
        CustomerInfo::new(
            PersonalName::new(
                String50::create("FirstName", Some("Ada")).unwrap(),
                String50::create("LastName", Some("Lovelace")).unwrap(),
            ),
            EmailAddress::create("EmailAddress", Some("ada@example.com")).unwrap(),
            status,
        )
    }

    #[rstest]
    #[case(VipStatus::Vip, true)]
    #[case(VipStatus::Normal, false)]
    fn is_vip_follows_status(#[case] status: VipStatus, #[case] expected: bool) {
        assert_eq!(customer(status).is_vip(), expected);
    }

    #[rstest]
    fn exposes_name_parts() {
        let info = customer(VipStatus::Normal);

        assert_eq!(info.name().first_name().value(), "Ada");
        assert_eq!(info.name().last_name().value(), "Lovelace");
        assert_eq!(info.email_address().value(), "ada@example.com");
    }
}
