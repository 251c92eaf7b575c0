use actix_web::{web, HttpResponse};

use pv_core::repositories::UserRepository;
use pv_core::services::verification::SmsDispatcher;

use super::AppState;
use crate::dto::auth::{StoredOtp, StoredOtpsResponse};

/// Handler for GET /api/v1/auth/stored-otps (debug)
///
/// Lists every pending code, including expired ones the sweeper has not
/// removed yet.
pub async fn stored_otps<S, U>(state: web::Data<AppState<S, U>>) -> HttpResponse
where
    S: SmsDispatcher + 'static,
    U: UserRepository + 'static,
{
    let data = state
        .verification_service
        .stored_codes()
        .await
        .into_iter()
        .map(|(phone, entry)| (phone, StoredOtp::from(entry)))
        .collect();

    HttpResponse::Ok().json(StoredOtpsResponse {
        success: true,
        message: "Stored OTPs retrieved".to_string(),
        data,
    })
}
