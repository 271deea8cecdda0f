//! Application state and factory
//!
//! This module holds the shared state handed to handlers and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    middleware::Logger,
    web, App, Error, HttpRequest, HttpResponse,
};

use tg_core::{TokenIssuer, TokenVerifier, UserAuthenticator};
use tg_shared::{AuthConfig, ErrorResponse};

use crate::middleware::{JwtAuth, RequireRole};
use crate::routes::{admin::admin, auth, health::health_check, me::me};

/// Shared services behind every handler
///
/// Issuer and verifier are separate capabilities so they can be backed by
/// different implementations; in production both are the same token service.
#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<dyn TokenIssuer>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub authenticator: Arc<dyn UserAuthenticator>,
    /// Role required by the admin scope
    pub admin_role: String,
    /// Access token lifetime in seconds, reported at login
    pub access_token_expiry: i64,
}

impl AppState {
    pub fn new(
        issuer: Arc<dyn TokenIssuer>,
        verifier: Arc<dyn TokenVerifier>,
        authenticator: Arc<dyn UserAuthenticator>,
        auth_config: &AuthConfig,
    ) -> Self {
        Self {
            issuer,
            verifier,
            authenticator,
            admin_role: auth_config.admin_role.clone(),
            access_token_expiry: auth_config.jwt.access_token_expiry,
        }
    }

    /// State with the default admin role and a 30 minute token lifetime
    pub fn with_defaults(
        issuer: Arc<dyn TokenIssuer>,
        verifier: Arc<dyn TokenVerifier>,
        authenticator: Arc<dyn UserAuthenticator>,
    ) -> Self {
        Self::new(issuer, verifier, authenticator, &AuthConfig::default())
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let verifier = Arc::clone(&state.verifier);
    let admin_role = state.admin_role.clone();

    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(auth::login))
                        .service(
                            web::resource("/logout")
                                .route(web::post().to(auth::logout))
                                .wrap(JwtAuth::new(Arc::clone(&verifier))),
                        ),
                )
                .service(
                    web::resource("/me")
                        .route(web::get().to(me))
                        .wrap(JwtAuth::new(Arc::clone(&verifier))),
                )
                // Role guard sits inside the access guard
                .service(
                    web::resource("/admin")
                        .route(web::get().to(admin))
                        .wrap(RequireRole::new(admin_role))
                        .wrap(JwtAuth::new(verifier)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let response =
        HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", "Invalid request body"));
    InternalError::from_response(err, response).into()
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
