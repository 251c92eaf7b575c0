//! Unit tests for the User entity and login outcome

use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::user::User;
use crate::domain::value_objects::LoginOutcome;

#[test]
fn test_new_verified_user_defaults() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let user = User::new_verified("+15551234567", now);

    assert_eq!(user.phone_number, "+15551234567");
    assert!(user.email.is_empty());
    assert!(user.full_name.is_empty());
    assert!(user.profile_image_url.is_empty());
    assert!(user.is_verified);
    assert_eq!(user.total_reports, 0);
    assert_eq!(user.resolved_reports, 0);
    assert_eq!(user.last_login, Some(now));
    assert_eq!(user.created_at, now);
    assert_eq!(user.updated_at, now);
}

#[test]
fn test_record_login_touches_timestamps_only() {
    let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let later = created + Duration::days(3);
    let mut user = User::new_verified("+15551234567", created);

    user.record_login(later);

    assert_eq!(user.last_login, Some(later));
    assert_eq!(user.updated_at, later);
    assert_eq!(user.created_at, created);
}

#[test]
fn test_requires_profile_setup() {
    let mut user = User::new_verified("+15551234567", Utc::now());
    assert!(user.requires_profile_setup());

    user.full_name = "Ada Lovelace".to_string();
    assert!(user.requires_profile_setup());

    user.email = "ada@example.com".to_string();
    assert!(!user.requires_profile_setup());

    user.full_name = "   ".to_string();
    assert!(user.requires_profile_setup());
}

#[test]
fn test_login_outcome_flags() {
    let mut user = User::new_verified("+15551234567", Utc::now());
    assert!(LoginOutcome::created(user.clone()).requires_profile_setup);

    user.full_name = "Ada Lovelace".to_string();
    user.email = "ada@example.com".to_string();

    let created = LoginOutcome::created(user.clone());
    assert!(created.is_new_user);
    assert!(created.requires_profile_setup);

    let existing = LoginOutcome::existing(user);
    assert!(!existing.is_new_user);
    assert!(!existing.requires_profile_setup);
}

#[test]
fn test_user_serializes_camel_case() {
    let user = User::new_verified("+15551234567", Utc::now());
    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["phoneNumber"], "+15551234567");
    assert_eq!(json["isVerified"], true);
    assert_eq!(json["totalReports"], 0);
    assert!(json.get("profileImageUrl").is_some());
}
