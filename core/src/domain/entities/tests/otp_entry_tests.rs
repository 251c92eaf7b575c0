//! Unit tests for the OtpEntry entity

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::otp_entry::{OtpEntry, DEFAULT_EXPIRATION_MINUTES};

fn issued_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_expiry_is_ttl_after_issue() {
    let entry = OtpEntry::new(
        "+15551234567",
        "123456",
        issued_at(),
        Duration::minutes(DEFAULT_EXPIRATION_MINUTES),
    );

    assert_eq!(entry.expires_at, issued_at() + Duration::minutes(5));
    assert_eq!(entry.phone_number, "+15551234567");
    assert_eq!(entry.code, "123456");
}

#[test]
fn test_valid_until_expiry_instant_inclusive() {
    let entry = OtpEntry::new("+15551234567", "123456", issued_at(), Duration::minutes(5));

    assert!(!entry.is_expired_at(issued_at()));
    assert!(!entry.is_expired_at(entry.expires_at));
    assert!(entry.is_expired_at(entry.expires_at + Duration::milliseconds(1)));
}

#[test]
fn test_serializes_camel_case() {
    let entry = OtpEntry::new("+15551234567", "000042", issued_at(), Duration::minutes(5));
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["phoneNumber"], "+15551234567");
    assert_eq!(json["code"], "000042");
    assert!(json.get("expiresAt").is_some());
}
