use crate::models::printer::PrinterReport;
use crate::services::printer_service::{PrinterService, ServiceError};
use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn create_app(service: Arc<PrinterService>) -> Router {
    Router::new()
        // Printer status
        .route("/printers", get(printers_handler))
        // Health check
        .route("/ping", get(ping_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(service)
}

pub async fn start_server(service: PrinterService, addr: SocketAddr) -> Result<(), Box<dyn Error>> {
    let app = create_app(Arc::new(service));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn printers_handler(
    State(service): State<Arc<PrinterService>>,
) -> Result<Json<PrinterReport>, ServiceError> {
    let report = service.handle_request().await?;
    Ok(Json(report))
}

async fn ping_handler() -> &'static str {
    "pong"
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
