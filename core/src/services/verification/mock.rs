//! In-memory SMS dispatcher for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::traits::SmsDispatcher;

/// Records every code it is asked to send instead of sending it
#[derive(Clone, Default)]
pub struct MockSmsDispatcher {
    sent_messages: Arc<Mutex<HashMap<String, String>>>,
    should_fail: Arc<AtomicBool>,
    failure_message: String,
}

impl MockSmsDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher whose sends fail with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        let dispatcher = Self {
            failure_message: message.into(),
            ..Self::default()
        };
        dispatcher.should_fail.store(true, Ordering::SeqCst);
        dispatcher
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Last code sent to `phone`
    pub fn get_sent_code(&self, phone: &str) -> Option<String> {
        self.sent_messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(phone)
            .cloned()
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[async_trait]
impl SmsDispatcher for MockSmsDispatcher {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if self.should_fail.load(Ordering::SeqCst) {
            let message = if self.failure_message.is_empty() {
                "SMS service error".to_string()
            } else {
                self.failure_message.clone()
            };
            return Err(message);
        }
        self.sent_messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(phone.to_string(), code.to_string());
        Ok(format!("SM{}", uuid::Uuid::new_v4().simple()))
    }
}
