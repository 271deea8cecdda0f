//! Role guard for privileged routes.
//!
//! Must be wrapped inside [`JwtAuth`](super::JwtAuth): it only inspects the
//! [`AuthContext`] the Access Guard attached and never re-verifies the token.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use log::{debug, error};
use std::{
    future::{ready, Ready},
    rc::Rc,
};
use tg_shared::ErrorResponse;

use super::auth::{unauthorized, AuthContext};

/// Role guard middleware factory
#[derive(Debug, Clone)]
pub struct RequireRole {
    role: Rc<str>,
}

impl RequireRole {
    pub fn new(role: impl AsRef<str>) -> Self {
        Self {
            role: Rc::from(role.as_ref()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            role: Rc::clone(&self.role),
        }))
    }
}

/// Role guard middleware service
pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    role: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let role = Rc::clone(&self.role);

        Box::pin(async move {
            let granted = match req.extensions().get::<AuthContext>() {
                Some(auth) => Some(auth.role == *role),
                None => None,
            };

            match granted {
                Some(true) => service.call(req).await.map(ServiceResponse::map_into_left_body),
                Some(false) => {
                    debug!("Role '{}' required for {}", role, req.path());
                    let response = HttpResponse::Forbidden().json(ErrorResponse::forbidden());
                    Ok(req.into_response(response).map_into_right_body())
                }
                None => {
                    // Guard ordering is wrong if this happens
                    error!("RequireRole reached without an AuthContext on {}", req.path());
                    Ok(req.into_response(unauthorized()).map_into_right_body())
                }
            }
        })
    }
}
