use actix_web::{web, HttpResponse};
use validator::Validate;

use pv_core::repositories::UserRepository;
use pv_core::services::verification::SmsDispatcher;
use pv_shared::phone::mask_phone_number;

use super::AppState;
use crate::dto::auth::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::{to_error_response, validation_error_response};

/// Handler for POST /api/v1/auth/send-otp
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "+15551234567" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "OTP sent successfully", "messageSid": "SM..." }
/// ```
///
/// ## Errors
/// - 400: `phoneNumber` missing or blank
/// - 500: the SMS provider rejected the message; its error text is in `error`
pub async fn send_otp<S, U>(
    state: web::Data<AppState<S, U>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    S: SmsDispatcher + 'static,
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let phone = request.phone_number.as_deref().unwrap_or_default();
    tracing::info!(phone = %mask_phone_number(phone), "Processing send-otp request");

    match state.verification_service.send_code(phone).await {
        Ok(result) => HttpResponse::Ok().json(SendOtpResponse {
            success: true,
            message: "OTP sent successfully".to_string(),
            message_sid: result.message_id,
        }),
        Err(error) => to_error_response(&error),
    }
}
