use actix_web::{web, HttpResponse};
use log::{error, info};
use validator::Validate;

use tg_shared::ErrorResponse;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};

/// Handler for POST /api/v1/auth/login
///
/// # Request Body
///
/// ```json
/// {
///     "user_name": "test_user",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJhbGciOiJSUzI1NiIs...",
///     "token_type": "Bearer",
///     "expires_in": 1800
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed body
/// - 401 Unauthorized: Unknown user or wrong password
/// - 500 Internal Server Error: Token issuance failed; no token is returned
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    if request.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("VALIDATION_ERROR", "Invalid request body"));
    }

    let user = match state
        .authenticator
        .authenticate(&request.user_name, &request.password)
        .await
    {
        Ok(user) => user,
        Err(e) if e.is_authentication_failure() => {
            return HttpResponse::Unauthorized().json(ErrorResponse::new(
                "INVALID_CREDENTIALS",
                "Invalid user name or password",
            ));
        }
        Err(e) => {
            error!("User directory failed during login: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse::internal());
        }
    };

    match state.issuer.issue_token(&user).await {
        Ok(token) => {
            info!("User {} logged in", user.id);
            HttpResponse::Ok().json(LoginResponse::bearer(token, state.access_token_expiry))
        }
        Err(e) => {
            error!("Token issuance failed for user {}: {}", user.id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal())
        }
    }
}
