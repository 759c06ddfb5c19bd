use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::AppError;
use crate::handlers;
use crate::openapi::ApiDoc;

/// Route table shared by the server and the HTTP tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let docs_path = ApiDoc::docs_path();

    cfg.app_data(query_config())
        .route("/sales", web::get().to(handlers::get_sales))
        .route("/health", web::get().to(handlers::health_check))
        .service(web::redirect(docs_path, format!("{docs_path}/")))
        .service(
            SwaggerUi::new(format!("{docs_path}/{{_:.*}}"))
                .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
        );
}

/// Unparsable query strings answer with the same JSON body as a missing parameter
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejecting unparsable query string");
        AppError::MissingParameters.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App, HttpResponse};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Limit {
        #[allow(dead_code)]
        limit: u32,
    }

    #[actix_web::test]
    async fn query_errors_render_json_body() {
        let app = test::init_service(App::new().configure(configure_routes).route(
            "/limited",
            web::get().to(|_: web::Query<Limit>| async { HttpResponse::Ok().finish() }),
        ))
        .await;

        let req = test::TestRequest::get().uri("/limited?limit=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": "Missing required parameters" }));
    }
}
