//! Session authentication middleware
//!
//! Applied declaratively to the routes that mutate posts. Requests whose
//! session does not carry `logged_in = true` are answered with HTTP 401 and
//! the JSON body the API contract specifies; a flash notice is also attached
//! to the session for the next rendered page.

use std::future::{ready, Ready};

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::error::AppError;
use crate::session;

const LOGIN_REQUIRED_MESSAGE: &str = "Please log in.";

pub struct SessionAuth;

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware { service }))
    }
}

pub struct SessionAuthMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = req.get_session();
        let logged_in = matches!(session.get::<bool>(session::LOGGED_IN_KEY), Ok(Some(true)));

        if logged_in {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) });
        }

        if let Err(err) = session::push_flash(&session, LOGIN_REQUIRED_MESSAGE) {
            tracing::warn!("failed to attach login flash: {}", err);
        }

        let (req, _payload) = req.into_parts();
        let res = AppError::Unauthorized(LOGIN_REQUIRED_MESSAGE.to_string()).error_response();

        Box::pin(ready(Ok(
            ServiceResponse::new(req, res).map_into_right_body()
        )))
    }
}
