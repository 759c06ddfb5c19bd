/// Sales Service - HTTP Server
///
/// Serves `GET /sales` and the Swagger UI at `/api-docs`.
use actix_web::{App, HttpServer};
use sales_service::openapi::ApiDoc;
use sales_service::{logging, routes, AppError, Config};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    logging::init_tracing(&config.log);

    let bind_addr = config.app.bind_address();
    tracing::info!(%bind_addr, env = %config.app.env, "starting sales-service");
    tracing::info!(
        "Server running at http://localhost:{}, docs at {}",
        config.app.port,
        ApiDoc::docs_path()
    );

    HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)
    .map_err(|e| AppError::StartServer(format!("bind {bind_addr}: {e}")))?
    .run()
    .await
    .map_err(|e| AppError::StartServer(e.to_string()))?;

    tracing::info!("sales-service shutting down");
    Ok(())
}
