use actix_web::{web, HttpResponse};
use validator::Validate;

use pv_core::repositories::UserRepository;
use pv_core::services::verification::{SmsDispatcher, VerifiedLogin};
use pv_shared::phone::mask_phone_number;

use super::AppState;
use crate::dto::auth::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::{to_error_response, validation_error_response};

const VERIFIED_MESSAGE: &str = "OTP verified successfully";
const PERSISTENCE_WARNING: &str = "OTP verified but the user record could not be saved";

/// Handler for POST /api/v1/auth/verify-otp
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "+15551234567", "otp": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "OTP verified successfully",
///     "user": { "id": "...", "phoneNumber": "+15551234567", ... },
///     "isNewUser": true,
///     "requiresProfileSetup": true
/// }
/// ```
///
/// When the code is valid but the user record cannot be written, the
/// response is still 200 with `success: true`, plus `warning` and `error`.
///
/// ## Errors
/// - 400: a field is missing, or the code is unknown, expired or wrong
pub async fn verify_otp<S, U>(
    state: web::Data<AppState<S, U>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    S: SmsDispatcher + 'static,
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let phone = request.phone_number.as_deref().unwrap_or_default();
    let otp = request.otp.as_deref().unwrap_or_default();
    tracing::info!(phone = %mask_phone_number(phone), "Processing verify-otp request");

    match state.verification_service.verify_code(phone, otp).await {
        Ok(VerifiedLogin::Account(outcome)) => HttpResponse::Ok().json(VerifyOtpResponse {
            success: true,
            message: VERIFIED_MESSAGE.to_string(),
            is_new_user: Some(outcome.is_new_user),
            requires_profile_setup: Some(outcome.requires_profile_setup),
            user: Some(outcome.user),
            warning: None,
            error: None,
        }),
        Ok(VerifiedLogin::PersistenceFailed { error }) => HttpResponse::Ok().json(VerifyOtpResponse {
            success: true,
            message: VERIFIED_MESSAGE.to_string(),
            user: None,
            is_new_user: None,
            requires_profile_setup: None,
            warning: Some(PERSISTENCE_WARNING.to_string()),
            error: Some(error),
        }),
        Err(error) => to_error_response(&error),
    }
}
