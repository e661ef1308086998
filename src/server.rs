use std::{
    future::Future,
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use axum::{
    Router,
    http::{HeaderName, Request, Response, StatusCode},
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::{
    config::AppConfig,
    routes::{create_api_router, doc::scalar_docs, not_found},
    state::AppState,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assembles the full application: search route, 404 fallback and middleware.
pub fn build_app(state: AppState, config: &AppConfig) -> Router {
    let mut router = create_api_router();
    if config.enable_docs {
        router = router.merge(scalar_docs());
    }

    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "request started"
            );
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    router
        .fallback(not_found)
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(ConcurrencyLimitLayer::new(config.max_concurrent_requests))
        .with_state(state)
}

/// A bound but not yet serving HTTP server.
pub struct Server {
    listener: TcpListener,
    app: Router,
}

impl Server {
    pub async fn bind(config: &AppConfig, state: AppState) -> anyhow::Result<Self> {
        let addr = SocketAddr::from((config.host.parse::<IpAddr>()?, config.port));
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            app: build_app(state, config),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until Ctrl-C.
    pub async fn serve(self) -> anyhow::Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serves until `signal` resolves, then drains in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await?;
        tracing::info!("server stopped");
        Ok(())
    }

    /// Runs the server on a background task.
    pub fn spawn(self) -> anyhow::Result<RunningServer> {
        let addr = self.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(self.serve_with_shutdown(async move {
            let _ = shutdown_rx.await;
        }));

        Ok(RunningServer {
            addr,
            shutdown_tx,
            handle,
        })
    }
}

pub struct RunningServer {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stops accepting connections and waits for the server task to finish.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        let _ = self.shutdown_tx.send(());
        self.handle.await?
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
