//! Background removal of expired OTP entries

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use pv_core::services::otp::OtpStore;

/// Spawn a task that calls [`OtpStore::purge_expired`] every `period`
///
/// The task runs until the returned handle is aborted or the runtime stops.
pub fn spawn_expiry_sweeper(store: Arc<OtpStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let removed = store.purge_expired().await;
            if removed > 0 {
                tracing::debug!(removed, event = "otp_swept", "Removed expired verification codes");
            }
        }
    })
}
