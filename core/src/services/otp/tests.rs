use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;

use super::{OtpConfig, OtpStore};
use crate::errors::OtpError;
use crate::services::clock::{Clock, ManualClock};

const PHONE: &str = "+15551234567";

fn store_with_clock() -> (OtpStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
    ));
    let store = OtpStore::new(clock.clone(), OtpConfig::default());
    (store, clock)
}

#[test]
fn test_generate_six_digits() {
    let (store, _) = store_with_clock();
    for _ in 0..200 {
        let code = store.generate();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[tokio::test]
async fn test_store_then_verify_succeeds_once() {
    let (store, _) = store_with_clock();
    store.store(PHONE, "123456").await;

    assert_eq!(store.verify(PHONE, "123456").await, Ok(()));
    assert_eq!(store.verify(PHONE, "123456").await, Err(OtpError::NotFound));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_verify_without_store_not_found() {
    let (store, _) = store_with_clock();
    assert_eq!(store.verify(PHONE, "000000").await, Err(OtpError::NotFound));
}

#[tokio::test]
async fn test_mismatch_keeps_entry() {
    let (store, _) = store_with_clock();
    store.store(PHONE, "123456").await;

    assert_eq!(store.verify(PHONE, "654321").await, Err(OtpError::Mismatch));
    assert_eq!(store.len().await, 1);
    assert_eq!(store.verify(PHONE, "123456").await, Ok(()));
}

#[tokio::test]
async fn test_mismatch_on_different_length() {
    let (store, _) = store_with_clock();
    store.store(PHONE, "123456").await;
    assert_eq!(store.verify(PHONE, "1234").await, Err(OtpError::Mismatch));
}

#[tokio::test]
async fn test_expired_entry_rejected_and_removed() {
    let (store, clock) = store_with_clock();
    store.store(PHONE, "123456").await;

    clock.advance(Duration::minutes(5) + Duration::seconds(1));

    assert_eq!(store.verify(PHONE, "123456").await, Err(OtpError::Expired));
    assert_eq!(store.verify(PHONE, "123456").await, Err(OtpError::NotFound));
}

#[tokio::test]
async fn test_valid_at_exact_expiry() {
    let (store, clock) = store_with_clock();
    store.store(PHONE, "123456").await;

    clock.advance(Duration::minutes(5));

    assert_eq!(store.verify(PHONE, "123456").await, Ok(()));
}

#[tokio::test]
async fn test_store_overwrites_previous_code() {
    let (store, clock) = store_with_clock();
    store.store(PHONE, "111111").await;
    clock.advance(Duration::minutes(1));
    let second = store.store(PHONE, "222222").await;

    assert_eq!(second.expires_at, clock.now() + Duration::minutes(5));
    assert_eq!(store.verify(PHONE, "111111").await, Err(OtpError::Mismatch));
    assert_eq!(store.verify(PHONE, "222222").await, Ok(()));
}

#[tokio::test]
async fn test_list_all_includes_expired() {
    let (store, clock) = store_with_clock();
    store.store(PHONE, "123456").await;
    clock.advance(Duration::minutes(10));
    store.store("+447700900123", "654321").await;

    let all = store.list_all().await;
    assert_eq!(all.len(), 2);
    assert_eq!(all[PHONE].code, "123456");
    assert!(all[PHONE].is_expired_at(clock.now()));
    assert!(!all["+447700900123"].is_expired_at(clock.now()));
}

#[tokio::test]
async fn test_purge_expired_removes_only_expired() {
    let (store, clock) = store_with_clock();
    store.store(PHONE, "123456").await;
    clock.advance(Duration::minutes(3));
    store.store("+447700900123", "654321").await;
    clock.advance(Duration::minutes(3));

    assert_eq!(store.purge_expired().await, 1);
    let all = store.list_all().await;
    assert!(all.contains_key("+447700900123"));
    assert!(!all.contains_key(PHONE));

    assert_eq!(store.purge_expired().await, 0);
}

#[tokio::test]
async fn test_custom_ttl() {
    let clock = Arc::new(ManualClock::default());
    let store = OtpStore::new(clock.clone(), OtpConfig::with_expiration_minutes(1));
    store.store(PHONE, "123456").await;

    clock.advance(Duration::seconds(61));
    assert_eq!(store.verify(PHONE, "123456").await, Err(OtpError::Expired));
}
