//! Records scraped from the library website

use super::{optional, required};
use serde::{Deserialize, Serialize};

/// An entry from the announcements page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementRecord {
    pub title: String,
    pub date: String,
    /// Absolute link to the announcement, empty when the row had none
    pub url: String,
}

impl AnnouncementRecord {
    pub fn try_new(
        title: impl Into<String>,
        date: impl Into<String>,
        url: impl Into<String>,
    ) -> Option<Self> {
        Some(Self {
            title: required(title)?,
            date: date.into().trim().to_string(),
            url: url.into().trim().to_string(),
        })
    }
}

/// A staff member's profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub name: String,
    pub title: Option<String>,
    pub unit: Option<String>,
    pub phone: Option<String>,
    pub internal_phone: Option<String>,
    pub email: Option<String>,
}

impl StaffRecord {
    /// Build a profile, returning `None` when the name is blank
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        Some(Self {
            name: required(name)?,
            ..Default::default()
        })
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = optional(title);
        self
    }

    pub fn with_unit(mut self, unit: Option<String>) -> Self {
        self.unit = optional(unit);
        self
    }

    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = optional(phone);
        self
    }

    pub fn with_internal_phone(mut self, internal_phone: Option<String>) -> Self {
        self.internal_phone = optional(internal_phone);
        self
    }

    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = optional(email);
        self
    }
}

/// The library's contact card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub address: Option<String>,
    pub phone: Vec<String>,
    pub email: Option<String>,
    pub working_hours: Option<String>,
}

impl ContactRecord {
    /// True when no attribute carries a value
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.phone.iter().all(|p| p.trim().is_empty())
            && self.email.is_none()
            && self.working_hours.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_builder_drops_blank_fields() {
        let staff = StaffRecord::try_new("Ayşe Demir")
            .unwrap()
            .with_title(Some("Kütüphaneci".into()))
            .with_email(Some("".into()));
        assert_eq!(staff.title.as_deref(), Some("Kütüphaneci"));
        assert_eq!(staff.email, None);
    }

    #[test]
    fn test_staff_without_name_rejected() {
        assert!(StaffRecord::try_new(" ").is_none());
    }

    #[test]
    fn test_contact_is_empty() {
        assert!(ContactRecord::default().is_empty());
        let contact = ContactRecord {
            phone: vec!["+90 488 217 3500".into()],
            ..Default::default()
        };
        assert!(!contact.is_empty());
    }

    #[test]
    fn test_announcement_requires_title() {
        assert!(AnnouncementRecord::try_new("", "01.02.2024", "").is_none());
        let ann = AnnouncementRecord::try_new("Sınav dönemi", " 01.02.2024 ", "").unwrap();
        assert_eq!(ann.date, "01.02.2024");
    }
}
