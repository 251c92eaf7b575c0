//! Unit tests for SMS module

#[cfg(feature = "twilio-sms")]
mod twilio_tests;
