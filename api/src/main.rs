use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pv_api::app::create_app;
use pv_api::config::Config;
use pv_api::routes::auth::AppState;
use pv_api::sweeper::spawn_expiry_sweeper;
use pv_core::services::clock::{Clock, SystemClock};
use pv_core::services::otp::{OtpConfig, OtpStore};
use pv_core::services::verification::{VerificationService, VerificationServiceConfig};
use pv_infra::database::{DatabasePool, MySqlUserRepository};
use pv_infra::sms::{create_sms_service, SmsDispatcherAdapter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        environment = %config.environment,
        sms_provider = %config.sms.provider,
        debug_routes = config.enable_debug_routes,
        "Starting PhoneVerify API server"
    );

    // Database
    let db_pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to database")?;
    if !db_pool.health_check().await.context("Database health check failed")? {
        anyhow::bail!("Database health check returned an unexpected result");
    }
    db_pool
        .ensure_schema()
        .await
        .context("Failed to create database schema")?;
    let user_repository = Arc::new(MySqlUserRepository::new(db_pool.get_pool().clone()));

    // SMS
    let sms_service = create_sms_service(&config.sms).context("Failed to initialize SMS service")?;
    let sms_dispatcher = Arc::new(
        SmsDispatcherAdapter::new(sms_service).with_expiration_minutes(config.otp.expiration_minutes),
    );

    // OTP store and verification service
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let otp_store = Arc::new(OtpStore::new(
        clock.clone(),
        OtpConfig::with_expiration_minutes(config.otp.expiration_minutes),
    ));
    let verification_service = Arc::new(VerificationService::new(
        sms_dispatcher,
        user_repository,
        otp_store.clone(),
        clock,
        VerificationServiceConfig {
            test_phone_number: config.otp.test_phone_number.clone(),
        },
    ));

    let sweeper = spawn_expiry_sweeper(otp_store, config.otp.sweep_interval());

    let app_state = web::Data::new(AppState::new(verification_service));
    let enable_debug_routes = config.enable_debug_routes;

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), enable_debug_routes));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    sweeper.abort();
    db_pool.close().await;
    Ok(())
}
