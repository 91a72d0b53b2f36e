use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::{Filter, Reply};
use crate::config::constants::{sleep_duration_millis, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::errors::{ErrlyzerError, ErrlyzerResult};
use crate::services::analysis_service::{AnalysisOutcome, AnalysisService};
use crate::services::response_normalizer::NormalizedReply;
use crate::structs::analysis_request::AnalysisRequest;

pub struct ApiServer {
    service: Arc<AnalysisService>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    pub fn new(service: Arc<AnalysisService>) -> Self {
        Self {
            service,
            shutdown_tx: None,
        }
    }

    pub fn routes(
        service: Arc<AnalysisService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let service_filter = warp::any().map(move || Arc::clone(&service));

        let generate = warp::path("generate")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(service_filter.clone())
            .and_then(generate_handler);

        let health = warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and(service_filter)
            .and_then(health_handler);

        generate.or(health)
    }

    pub async fn serve(&mut self, addr: SocketAddr) -> ErrlyzerResult<()> {
        let routes = Self::routes(Arc::clone(&self.service));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let (bound_addr, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ErrlyzerError::system_error("bind", &e.to_string()))?;

        log::info!("🌐 Analysis server listening on http://{}", bound_addr);
        log::info!("⏹️  Press Ctrl+C to stop");

        let server_handle = tokio::spawn(server);

        tokio::signal::ctrl_c()
            .await
            .map_err(|e| ErrlyzerError::system_error("signal handling", &e.to_string()))?;

        self.shutdown().await?;

        server_handle
            .await
            .map_err(|e| ErrlyzerError::system_error("server shutdown", &e.to_string()))?;

        Ok(())
    }

    pub async fn shutdown(&mut self) -> ErrlyzerResult<()> {
        log::info!("🛑 Shutting down analysis server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ErrlyzerError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Analysis server shutdown complete");

        Ok(())
    }
}

async fn generate_handler(
    request: AnalysisRequest,
    service: Arc<AnalysisService>,
) -> Result<impl warp::Reply, Infallible> {
    let (reply, status) = match service.analyze(&request).await {
        AnalysisOutcome::Completed(reply) => (reply, StatusCode::OK),
        AnalysisOutcome::UpstreamFailed(reply) => (reply, StatusCode::BAD_GATEWAY),
    };

    Ok(render_reply(reply, status))
}

async fn health_handler(service: Arc<AnalysisService>) -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::json(&service.health()))
}

fn render_reply(reply: NormalizedReply, status: StatusCode) -> warp::reply::Response {
    match reply {
        NormalizedReply::Text(text) => warp::reply::with_status(text, status).into_response(),
        NormalizedReply::Json(report) => {
            warp::reply::with_status(warp::reply::json(&report), status).into_response()
        }
    }
}
