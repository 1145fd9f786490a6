//! Request logging stage.

use std::sync::Arc;

use axum::extract::Request;

use super::{Handler, RequestId, handler_fn};

/// Stage that logs the request method and target at info level.
///
/// Must run after [`super::set_request_id`]; the log line carries the
/// request's `request_id`.
///
/// # Panics
///
/// The returned handler panics if the request carries no [`RequestId`],
/// which means the pipeline was composed without `set_request_id` ahead of
/// this stage.
#[allow(clippy::panic)]
pub fn log_request(next: Handler) -> Handler {
    handler_fn(move |req: Request| {
        let next = Arc::clone(&next);
        async move {
            let Some(id) = RequestId::of(&req) else {
                panic!("log_request requires set_request_id earlier in the chain");
            };

            tracing::info!(request_id = %id, "{} {}", req.method(), req.uri());

            next(req).await
        }
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use axum::body::Body;
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::pipeline::{REQUEST_ID_HEADER, chain, set_request_id};

    /// Log sink shared between the subscriber and the assertions.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if let Ok(mut sink) = self.0.lock() {
                sink.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn request(method: Method, uri: &str) -> Request {
        let Ok(req) = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
        else {
            panic!("valid request");
        };
        req
    }

    fn ok_handler() -> Handler {
        handler_fn(|_req| async {
            tracing::info!("handling request");
            StatusCode::OK.into_response()
        })
    }

    #[tokio::test]
    async fn every_log_line_carries_the_request_id() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let handler = chain(ok_handler(), &[&set_request_id, &log_request]);
        let response = handler(request(Method::POST, "/triggers/git")).await;

        let Some(id) = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        else {
            panic!("request id header");
        };

        let lines = captured.lines();
        assert_eq!(lines.len(), 3, "unexpected log output: {lines:?}");
        assert!(lines.iter().all(|line| line.contains(id)));
        assert!(lines.iter().any(|line| line.contains("setting request ID")));
        assert!(lines.iter().any(|line| line.contains("POST /triggers/git")));
    }

    #[tokio::test]
    async fn logs_before_the_handler_runs() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let handler = chain(ok_handler(), &[&set_request_id, &log_request]);
        handler(request(Method::GET, "/")).await;

        let lines = captured.lines();
        let Some(request_line) = lines.iter().position(|l| l.contains("GET /")) else {
            panic!("request line logged");
        };
        let Some(handler_line) = lines.iter().position(|l| l.contains("handling request")) else {
            panic!("handler line logged");
        };
        assert!(request_line < handler_line);
    }

    #[tokio::test]
    async fn passes_request_through_unchanged() {
        let echo = handler_fn(|req: Request| async move { req.uri().to_string().into_response() });
        let handler = chain(echo, &[&set_request_id, &log_request]);

        let response = handler(request(Method::GET, "/repos?page=2")).await;
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("readable body");
        };
        assert_eq!(bytes, "/repos?page=2");
    }

    #[tokio::test]
    #[should_panic(expected = "requires set_request_id")]
    async fn panics_without_request_id_stage() {
        let handler = chain(ok_handler(), &[&log_request]);
        handler(request(Method::GET, "/")).await;
    }
}
