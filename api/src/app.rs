//! Application state and factory
//!
//! This module wires the verification service into the Actix-web
//! application and mounts the routes.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use pv_core::repositories::UserRepository;
use pv_core::services::verification::SmsDispatcher;

use crate::handlers::error::{json_error_handler, not_found};
use crate::routes::auth::{
    send_otp::send_otp, send_test_otp::send_test_otp, stored_otps::stored_otps,
    verify_otp::verify_otp, AppState,
};

/// Create and configure the application with all dependencies
///
/// `/send-test-otp` and `/stored-otps` are only mounted when
/// `enable_debug_routes` is set; otherwise they fall through to 404.
pub fn create_app<S, U>(
    app_state: web::Data<AppState<S, U>>,
    enable_debug_routes: bool,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SmsDispatcher + 'static,
    U: UserRepository + 'static,
{
    let mut auth = web::scope("/auth")
        .route("/send-otp", web::post().to(send_otp::<S, U>))
        .route("/verify-otp", web::post().to(verify_otp::<S, U>));

    if enable_debug_routes {
        auth = auth
            .route("/send-test-otp", web::post().to(send_test_otp::<S, U>))
            .route("/stored-otps", web::get().to(stored_otps::<S, U>));
    }

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(web::scope("/api/v1").service(auth))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "phone-verify-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
