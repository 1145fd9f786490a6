//! Request-processing pipeline: stages composed around a terminal handler.
//!
//! A [`Handler`] is a cloneable async callable from [`Request`] to
//! [`Response`]. A stage is any `Fn(Handler) -> Handler`: it receives the
//! rest of the pipeline and returns a new callable that runs its own logic
//! around it. [`chain`] composes stages so that the first one listed is the
//! first one to run.
//!
//! ```text
//! chain(h, &[&set_request_id, &log_request])
//!     == set_request_id(log_request(h))
//!
//! request ──► set_request_id ──► log_request ──► h
//! ```
//!
//! [`Pipeline`] adapts a composed [`Handler`] into a `tower::Service` so it
//! can be mounted on an axum route.

pub mod logging;
pub mod request_id;

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::handler::Handler as AxumHandler;
use axum::response::Response;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tower::{Service, ServiceExt};

pub use logging::log_request;
pub use request_id::{REQUEST_ID_HEADER, RequestId, set_request_id};

/// Async request handler shared by every stage of a pipeline.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// Composes `stages` around `handler`.
///
/// Stages are applied in reverse order so that, at request time, they run
/// in the order they are listed: `chain(h, &[&s1, &s2])` calls `s1`, then
/// `s2`, then `h`. Composition never fails and never invokes anything.
#[must_use]
pub fn chain(handler: Handler, stages: &[&dyn Fn(Handler) -> Handler]) -> Handler {
    stages.iter().rev().fold(handler, |next, stage| stage(next))
}

/// Lifts an async closure into a [`Handler`].
pub fn handler_fn<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| f(req).boxed())
}

/// Lifts an axum handler function (with its extractors) into a [`Handler`]
/// bound to `state`.
pub fn terminal<H, T, S>(handler: H, state: S) -> Handler
where
    H: AxumHandler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    let service = handler.with_state(state);
    Arc::new(move |req| {
        let service = service.clone();
        async move {
            match service.oneshot(req).await {
                Ok(response) => response,
                Err(never) => match never {},
            }
        }
        .boxed()
    })
}

/// A composed [`Handler`] exposed as a `tower::Service`.
#[derive(Clone)]
pub struct Pipeline {
    handler: Handler,
}

impl Pipeline {
    /// Wraps an already composed handler.
    #[must_use]
    pub fn new(handler: Handler) -> Self {
        Self { handler }
    }

    /// Composes the standard stages (request ID, then request logging)
    /// around `handler`.
    #[must_use]
    pub fn traced(handler: Handler) -> Self {
        Self::new(chain(handler, &[&set_request_id, &log_request]))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").finish_non_exhaustive()
    }
}

impl Service<Request> for Pipeline {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        (self.handler)(req).map(Ok).boxed()
    }
}
