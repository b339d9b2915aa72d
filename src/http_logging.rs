use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

/// A Tower layer that logs HTTP requests and responses.
#[derive(Clone, Copy)]
pub struct HttpLoggingLayer;

impl<S> Layer<S> for HttpLoggingLayer {
    type Service = HttpLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLoggingService { inner }
    }
}

/// A Tower service that logs HTTP requests and responses.
#[derive(Clone)]
pub struct HttpLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        info!(http.method = %method, http.path = %path, "HTTP request started");

        // Swap in a fresh clone so the service that was polled ready handles this call.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            match &result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() {
                        warn!(
                            http.method = %method,
                            http.path = %path,
                            http.status = status.as_u16(),
                            duration_ms = %duration_ms,
                            "HTTP request completed with server error"
                        );
                    } else {
                        info!(
                            http.method = %method,
                            http.path = %path,
                            http.status = status.as_u16(),
                            duration_ms = %duration_ms,
                            "HTTP request completed"
                        );
                    }
                }
                Err(_) => {
                    warn!(
                        http.method = %method,
                        http.path = %path,
                        duration_ms = %duration_ms,
                        "HTTP request failed"
                    );
                }
            }

            result
        })
    }
}
