//! Templates for the structured record kinds.

use super::LINE_BREAK;
use crate::core::string::non_blank;
use crate::records::{
    AcademicRecord, AnnouncementRecord, CatalogRecord, ContactRecord, StaffRecord,
};
use std::fmt::Write;

/// Width of the rule drawn under each catalog entry
const CATALOG_RULE_WIDTH: usize = 30;

/// Push `text` followed by the line-break token
fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str(LINE_BREAK);
}

/// Push an indented `icon label: value` line when the value is present
fn push_field(out: &mut String, icon: &str, label: &str, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        let _ = write!(out, "   {icon} {label}: {value}{LINE_BREAK}");
    }
}

fn header(text: &str) -> String {
    format!("{text}{LINE_BREAK}{LINE_BREAK}")
}

pub(super) fn format_catalog(records: &[CatalogRecord]) -> String {
    let rule = "—".repeat(CATALOG_RULE_WIDTH);
    let mut out = header("Kütüphane kataloğunda şu kaynakları buldum:");
    out.push_str(LINE_BREAK);
    out.push_str(LINE_BREAK);
    for (i, record) in records.iter().enumerate() {
        push_line(&mut out, &format!("{}. 📚 {}", i + 1, record.title));
        push_field(&mut out, "🗓️", "Yıl", record.year.as_deref());
        push_line(&mut out, &rule);
    }
    out
}

pub(super) fn format_academic(records: &[AcademicRecord]) -> String {
    let mut out = header("Akademik kaynaklarda şu sonuçları buldum:");
    for (i, record) in records.iter().enumerate() {
        push_line(&mut out, &format!("{}. 📄 {}", i + 1, record.title));
        push_field(&mut out, "📅", "Tarih", record.date.as_deref());
        out.push_str(LINE_BREAK);
    }
    out
}

pub(super) fn format_announcements(records: &[AnnouncementRecord]) -> String {
    let mut out = header("Kütüphane duyurularını buldum:");
    for (i, record) in records.iter().enumerate() {
        push_line(&mut out, &format!("{}. 📢 {}", i + 1, record.title));
        push_field(&mut out, "📅", "Tarih", Some(record.date.as_str()));
        out.push_str(LINE_BREAK);
    }
    out
}

pub(super) fn format_staff(records: &[StaffRecord]) -> String {
    let mut out = header("Kütüphane personel bilgileri:");
    for (i, person) in records.iter().enumerate() {
        push_line(&mut out, &format!("{}. 👤 {}", i + 1, person.name));
        push_field(&mut out, "📋", "Görev", person.title.as_deref());
        push_field(&mut out, "📧", "E-posta", person.email.as_deref());
        push_field(&mut out, "📞", "Telefon", person.phone.as_deref());
        out.push_str(LINE_BREAK);
    }
    out
}

/// Present contact attributes as `label: value` items, in display order
pub(super) fn contact_items(contact: &ContactRecord) -> Vec<String> {
    let phones: Vec<&str> = contact
        .phone
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();

    let mut items = Vec::new();
    if let Some(address) = non_blank(contact.address.as_deref()) {
        items.push(format!("📍 Adres: {address}"));
    }
    if !phones.is_empty() {
        items.push(format!("📞 Telefon: {}", phones.join(", ")));
    }
    if let Some(email) = non_blank(contact.email.as_deref()) {
        items.push(format!("📧 E-posta: {email}"));
    }
    if let Some(hours) = non_blank(contact.working_hours.as_deref()) {
        items.push(format!("⏰ Çalışma Saatleri: {hours}"));
    }
    items
}

pub(super) fn format_contact(contact: &ContactRecord) -> String {
    contact_items(contact)
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(title: &str, year: Option<&str>) -> CatalogRecord {
        CatalogRecord::try_new(title, year.map(String::from)).unwrap()
    }

    #[test]
    fn test_catalog_layout() {
        let out = format_catalog(&[catalog("Nutuk", Some("1927")), catalog("Çalıkuşu", None)]);
        let rule = "—".repeat(30);
        let expected = format!(
            "Kütüphane kataloğunda şu kaynakları buldum:<br/><br/><br/><br/>\
             1. 📚 Nutuk<br/>   🗓️ Yıl: 1927<br/>{rule}<br/>\
             2. 📚 Çalıkuşu<br/>{rule}<br/>"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_catalog_rule_is_thirty_chars() {
        let out = format_catalog(&[catalog("Nutuk", None)]);
        let rule_line = out
            .split(LINE_BREAK)
            .find(|line| line.starts_with('—'))
            .unwrap();
        assert_eq!(rule_line.chars().count(), 30);
    }

    #[test]
    fn test_academic_layout() {
        let records = vec![
            AcademicRecord::try_new("Dicle Havzası", "Kaya, M.", Some("2021".into()), None)
                .unwrap(),
            AcademicRecord::try_new("Hasankeyf", "", None, None).unwrap(),
        ];
        assert_eq!(
            format_academic(&records),
            "Akademik kaynaklarda şu sonuçları buldum:<br/><br/>\
             1. 📄 Dicle Havzası<br/>   📅 Tarih: 2021<br/><br/>\
             2. 📄 Hasankeyf<br/><br/>"
        );
    }

    #[test]
    fn test_announcement_without_date_has_no_date_line() {
        let records = vec![AnnouncementRecord::try_new("Kitap fuarı", "", "").unwrap()];
        assert_eq!(
            format_announcements(&records),
            "Kütüphane duyurularını buldum:<br/><br/>1. 📢 Kitap fuarı<br/><br/>"
        );
    }

    #[test]
    fn test_staff_field_order() {
        let person = StaffRecord::try_new("Ali Veli")
            .unwrap()
            .with_phone(Some("0488 217 00 00".into()))
            .with_email(Some("ali@batman.edu.tr".into()))
            .with_title(Some("Şef".into()))
            .with_unit(Some("Kütüphane".into()));
        assert_eq!(
            format_staff(&[person]),
            "Kütüphane personel bilgileri:<br/><br/>\
             1. 👤 Ali Veli<br/>   📋 Görev: Şef<br/>   📧 E-posta: ali@batman.edu.tr<br/>\
             \u{20}  📞 Telefon: 0488 217 00 00<br/><br/>"
        );
    }

    #[test]
    fn test_contact_with_address_and_email_only() {
        let contact = ContactRecord {
            address: Some("Batı Raman Kampüsü, Batman".into()),
            phone: vec![],
            email: Some("kutuphane@batman.edu.tr".into()),
            working_hours: Some("  ".into()),
        };
        let out = format_contact(&contact);
        let lines: Vec<&str> = out.split(LINE_BREAK).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1. 📍 Adres: Batı Raman Kampüsü, Batman");
        assert_eq!(lines[1], "2. 📧 E-posta: kutuphane@batman.edu.tr");
    }

    #[test]
    fn test_contact_joins_multiple_phones() {
        let contact = ContactRecord {
            phone: vec!["+90 488 217 3500".into(), "+90 488 217 3501".into()],
            working_hours: Some("08:00-17:00".into()),
            ..Default::default()
        };
        assert_eq!(
            format_contact(&contact),
            "1. 📞 Telefon: +90 488 217 3500, +90 488 217 3501<br/>\
             2. ⏰ Çalışma Saatleri: 08:00-17:00"
        );
    }
}
