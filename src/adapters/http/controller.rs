//! Generic controller: serves any [`UseCase`] over HTTP.
//!
//! A controller is built once per route while the router is assembled. Its
//! use case and the `Logger` are resolved from the [`DependencyContext`] at
//! that point, so a missing binding fails startup rather than a request.
//!
//! Per request:
//!
//! ```text
//! Request → RawRequest → middlewares → extract(fields) → decode U::Input
//!         → spawned U::execute → ServiceSuccess | DomainError | fault
//! ```
//!
//! A fault (the use case task panicked or was aborted) is reported to the
//! `Logger` and answered with a generic 500. Its detail never reaches the
//! client.

use std::any::Any;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use futures::future::BoxFuture;
use tokio::task::JoinError;

use super::extract::{extract, RawRequest, RequestField};
use super::middleware::{Flow, Middleware, REQUEST_ID_LOCAL};
use super::response::unexpected_error_response;
use crate::application::context::{ContextError, DependencyContext, FromContext};
use crate::application::use_case::UseCase;
use crate::domain::foundation::DomainError;
use crate::ports::Logger;

pub struct Controller<U: UseCase> {
    use_case: Arc<U>,
    fields: Vec<RequestField>,
    middlewares: Vec<Arc<dyn Middleware>>,
    logger: Arc<dyn Logger>,
}

impl<U: UseCase> Clone for Controller<U> {
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            fields: self.fields.clone(),
            middlewares: self.middlewares.clone(),
            logger: Arc::clone(&self.logger),
        }
    }
}

impl<U: UseCase + FromContext> Controller<U> {
    /// Resolves `U` and the `Logger` from `context`.
    ///
    /// # Errors
    ///
    /// - `ContextError::Missing` naming the first capability not bound
    pub fn build(
        context: &DependencyContext,
        fields: &[RequestField],
        middlewares: Vec<Arc<dyn Middleware>>,
    ) -> Result<Self, ContextError> {
        let use_case = Arc::new(U::from_context(context)?);
        Self::new(use_case, fields, middlewares, context)
    }
}

impl<U: UseCase> Controller<U> {
    /// Wraps an already constructed use case.
    ///
    /// # Errors
    ///
    /// - `ContextError::Missing` if no `Logger` is bound
    pub fn new(
        use_case: Arc<U>,
        fields: &[RequestField],
        middlewares: Vec<Arc<dyn Middleware>>,
        context: &DependencyContext,
    ) -> Result<Self, ContextError> {
        let mut fields = fields.to_vec();
        fields.sort_unstable();
        fields.dedup();

        Ok(Self {
            use_case,
            fields,
            middlewares,
            logger: context.resolve::<dyn Logger>()?,
        })
    }

    /// Request sections this controller hands to its use case.
    pub fn fields(&self) -> &[RequestField] {
        &self.fields
    }

    pub async fn serve(&self, request: Request) -> Response {
        let mut raw = match RawRequest::from_request(request).await {
            Ok(raw) => raw,
            Err(error) => return self.respond_failure(error, None),
        };

        for middleware in &self.middlewares {
            if let Flow::Respond(response) = middleware.handle(&mut raw).await {
                return response;
            }
        }

        let request_id = raw
            .locals
            .get(REQUEST_ID_LOCAL)
            .and_then(|id| id.as_str())
            .map(str::to_string);

        let input = match extract(&self.fields, &raw).decode::<U::Input>() {
            Ok(input) => input,
            Err(error) => return self.respond_failure(error, request_id.as_deref()),
        };

        let use_case = Arc::clone(&self.use_case);
        let outcome = tokio::spawn(async move { use_case.execute(input).await }).await;

        match outcome {
            Ok(Ok(success)) => success.into_response(),
            Ok(Err(error)) => self.respond_failure(error, request_id.as_deref()),
            Err(fault) => {
                self.logger.error(&format!(
                    "Unhandled fault in {}: {}",
                    U::NAME,
                    describe_fault(fault)
                ));
                unexpected_error_response()
            }
        }
    }

    /// Turns the controller into an axum handler.
    pub fn into_handler(
        self,
    ) -> impl Fn(Request) -> BoxFuture<'static, Response> + Clone + Send + Sync + 'static {
        let controller = Arc::new(self);
        move |request: Request| -> BoxFuture<'static, Response> {
            let controller = Arc::clone(&controller);
            Box::pin(async move { controller.serve(request).await })
        }
    }

    fn respond_failure(&self, error: DomainError, request_id: Option<&str>) -> Response {
        if error.status().is_server_error() {
            tracing::warn!(use_case = U::NAME, request_id, error = %error, "Use case failed");
        } else {
            tracing::debug!(use_case = U::NAME, request_id, error = %error, "Use case rejected request");
        }
        error.into_response()
    }
}

fn describe_fault(fault: JoinError) -> String {
    if fault.is_cancelled() {
        return "task was cancelled".to_string();
    }
    match fault.try_into_panic() {
        Ok(payload) => panic_message(payload.as_ref()),
        Err(fault) => fault.to_string(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}
