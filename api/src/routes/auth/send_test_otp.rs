use actix_web::{web, HttpResponse};

use pv_core::repositories::UserRepository;
use pv_core::services::verification::SmsDispatcher;

use super::AppState;
use crate::dto::auth::SendTestOtpResponse;
use crate::handlers::error::to_error_response;

/// Handler for POST /api/v1/auth/send-test-otp (debug)
///
/// Runs the send flow against `OTP_TEST_PHONE_NUMBER` and echoes the code
/// as `testOTP`. Any request body is ignored.
pub async fn send_test_otp<S, U>(state: web::Data<AppState<S, U>>) -> HttpResponse
where
    S: SmsDispatcher + 'static,
    U: UserRepository + 'static,
{
    match state.verification_service.send_test_code().await {
        Ok(result) => HttpResponse::Ok().json(SendTestOtpResponse {
            success: true,
            message: "Test OTP sent successfully".to_string(),
            message_sid: result.message_id,
            test_otp: result.code,
        }),
        Err(error) => to_error_response(&error),
    }
}
