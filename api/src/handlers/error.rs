//! Conversion of domain errors into JSON error responses

use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};
use validator::ValidationErrors;

use pv_core::errors::{DomainError, OtpError};
use pv_shared::errors::{error_codes, ErrorResponse};

/// Map a domain error to its HTTP response
///
/// Validation and OTP failures are 400. Everything else is a server-side
/// failure and carries the underlying error text in `error`.
pub fn to_error_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::ValidationErr(e) => HttpResponse::BadRequest()
            .json(ErrorResponse::new(e.to_string(), error_codes::VALIDATION_ERROR)),
        DomainError::Otp(otp) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(otp.to_string(), otp_error_code(otp)))
        }
        DomainError::SmsDispatch { message } => {
            tracing::error!(error = %message, "SMS dispatch failed");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to send OTP", message.clone()))
        }
        other => {
            tracing::error!(error = %other, "Unhandled error");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Internal server error", other.to_string()))
        }
    }
}

fn otp_error_code(err: &OtpError) -> &'static str {
    match err {
        OtpError::NotFound => error_codes::VERIFICATION_CODE_NOT_FOUND,
        OtpError::Expired => error_codes::VERIFICATION_CODE_EXPIRED,
        OtpError::Mismatch => error_codes::VERIFICATION_CODE_INVALID,
    }
}

/// 400 response for request bodies that fail `validator` rules
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut body = ErrorResponse::new("Invalid request data", error_codes::VALIDATION_ERROR);
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body = body.add_detail(field.to_string(), messages);
    }
    HttpResponse::BadRequest().json(body)
}

/// `JsonConfig` error handler: malformed bodies get the standard error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        "Invalid request body",
        err.to_string(),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "The requested resource was not found",
        error_codes::NOT_FOUND,
    ))
}
