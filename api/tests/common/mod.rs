//! Shared setup for the HTTP integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{TimeZone, Utc};

use pv_api::routes::auth::AppState;
use pv_core::repositories::user::MockUserRepository;
use pv_core::services::clock::ManualClock;
use pv_core::services::otp::{OtpConfig, OtpStore};
use pv_core::services::verification::{
    MockSmsDispatcher, VerificationService, VerificationServiceConfig,
};

pub const PHONE: &str = "+15551234567";
pub const TEST_PHONE: &str = "+15550001111";

pub type TestState = AppState<MockSmsDispatcher, MockUserRepository>;

pub struct TestContext {
    pub sms: Arc<MockSmsDispatcher>,
    pub users: Arc<MockUserRepository>,
    pub store: Arc<OtpStore>,
    pub clock: Arc<ManualClock>,
    pub state: web::Data<TestState>,
}

pub fn context_with(sms: MockSmsDispatcher, test_phone: Option<&str>) -> TestContext {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap(),
    ));
    let store = Arc::new(OtpStore::new(clock.clone(), OtpConfig::default()));
    let sms = Arc::new(sms);
    let users = Arc::new(MockUserRepository::new());

    let config = VerificationServiceConfig {
        test_phone_number: test_phone.map(str::to_string),
    };
    let service = Arc::new(VerificationService::new(
        sms.clone(),
        users.clone(),
        store.clone(),
        clock.clone(),
        config,
    ));

    TestContext {
        sms,
        users,
        store,
        clock,
        state: web::Data::new(AppState::new(service)),
    }
}

pub fn context() -> TestContext {
    context_with(MockSmsDispatcher::new(), Some(TEST_PHONE))
}
