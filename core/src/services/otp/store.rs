//! OTP store implementation

use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use pv_shared::phone::mask_phone_number;

use crate::domain::entities::otp_entry::{OtpEntry, CODE_LENGTH};
use crate::errors::OtpError;
use crate::services::clock::Clock;

use super::config::OtpConfig;

/// Process-scoped map of phone number to pending code
pub struct OtpStore {
    entries: RwLock<HashMap<String, OtpEntry>>,
    clock: Arc<dyn Clock>,
    config: OtpConfig,
}

impl OtpStore {
    pub fn new(clock: Arc<dyn Clock>, config: OtpConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            config,
        }
    }

    /// Generate a 6-digit numeric code from the OS CSPRNG
    ///
    /// Leading zeros are kept. Codes are not guaranteed unique.
    pub fn generate(&self) -> String {
        let n: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:0width$}", n, width = CODE_LENGTH)
    }

    /// Store `code` for `phone_number`, replacing any pending code
    pub async fn store(&self, phone_number: &str, code: &str) -> OtpEntry {
        let entry = OtpEntry::new(phone_number, code, self.clock.now(), self.config.ttl);

        let replaced = self
            .entries
            .write()
            .await
            .insert(phone_number.to_string(), entry.clone())
            .is_some();

        tracing::debug!(
            phone = %mask_phone_number(phone_number),
            expires_at = %entry.expires_at,
            replaced,
            event = "otp_stored",
            "Stored verification code"
        );

        entry
    }

    /// Check `submitted_code` against the pending code for `phone_number`
    ///
    /// A match consumes the entry. An expired entry is removed. A mismatch
    /// leaves the entry in place so the user can retry until it expires.
    pub async fn verify(&self, phone_number: &str, submitted_code: &str) -> Result<(), OtpError> {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;

        let entry = entries.get(phone_number).ok_or(OtpError::NotFound)?;

        if entry.is_expired_at(now) {
            entries.remove(phone_number);
            return Err(OtpError::Expired);
        }

        if !constant_time_eq(entry.code.as_bytes(), submitted_code.as_bytes()) {
            return Err(OtpError::Mismatch);
        }

        entries.remove(phone_number);
        Ok(())
    }

    /// Snapshot of every stored entry, including expired ones not yet purged
    pub async fn list_all(&self) -> BTreeMap<String, OtpEntry> {
        self.entries
            .read()
            .await
            .iter()
            .map(|(phone, entry)| (phone.clone(), entry.clone()))
            .collect()
    }

    /// Drop every expired entry and return how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
