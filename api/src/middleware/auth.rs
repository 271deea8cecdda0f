//! JWT authentication middleware for protecting API endpoints.
//!
//! The Access Guard hands the raw `Authorization` header to the injected
//! [`TokenVerifier`], rejects the request with 401 on any failure, and on
//! success attaches an [`AuthContext`] to the request extensions for
//! downstream handlers and the Role Guard.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use log::{debug, warn};
use serde::Serialize;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};
use tg_core::{AuthenticatedSession, SessionId, TokenError, TokenVerifier, UserId};
use tg_shared::ErrorResponse;

/// User authentication context injected into requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthContext {
    /// User ID resolved from the session store
    pub user_id: UserId,
    /// Session record backing the presented token
    #[serde(skip)]
    pub session_id: SessionId,
    pub role: String,
    pub user_name: String,
}

impl From<AuthenticatedSession> for AuthContext {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            user_id: session.user_id,
            session_id: session.session_id,
            role: session.claims.role,
            user_name: session.claims.user_name,
        }
    }
}

/// Uniform 401 response; the failure reason is only logged
pub(crate) fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::unauthorized())
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    verifier: Arc<dyn TokenVerifier>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `verifier`
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let authorization = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            match verifier.verify_authorization(authorization.as_deref()).await {
                Ok(session) => {
                    req.extensions_mut().insert(AuthContext::from(session));
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    match &err {
                        TokenError::StoreUnavailable { .. } => {
                            warn!("Rejecting {} {}: {}", req.method(), req.path(), err)
                        }
                        _ => debug!("Rejecting {} {}: {}", req.method(), req.path(), err.code()),
                    }
                    Ok(req.into_response(unauthorized()).map_into_right_body())
                }
            }
        })
    }
}

/// Extractor for required authentication
///
/// Only succeeds behind [`JwtAuth`]; elsewhere it answers 401.
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| InternalError::from_response("missing auth context", unauthorized()).into());

        ready(result)
    }
}
