/// Sales API Handlers
use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{ErrorResponse, SalesQuery, SalesRecord, SALES_RECORDS};

/// GET /sales
///
/// Returns sales data. `days`, `columns` and `resources` must be present and
/// non-empty; their values do not change the result.
#[utoipa::path(
    get,
    path = "/sales",
    tag = "sales",
    summary = "Returns sales data",
    params(
        ("days" = String, Query, description = "The number of days"),
        ("columns" = String, Query, description = "The columns to include"),
        ("resources" = String, Query, description = "The resources to include"),
    ),
    responses(
        (status = 200, description = "A list of sales data", body = [SalesRecord],
            example = json!([
                {"id": 1, "date": "2024-07-01", "amount": 100.00},
                {"id": 2, "date": "2024-07-02", "amount": 200.00},
                {"id": 3, "date": "2024-07-03", "amount": 300.00}
            ])
        ),
        (status = 400, description = "A required parameter is missing", body = ErrorResponse,
            example = json!({"error": "Missing required parameters"})
        )
    )
)]
pub async fn get_sales(pairs: web::Query<Vec<(String, String)>>) -> Result<HttpResponse> {
    let query: SalesQuery = pairs.into_inner().into_iter().collect();

    let missing = query.missing_parameters();
    if !missing.is_empty() {
        debug!(missing = ?missing, "rejecting sales request");
        return Err(AppError::MissingParameters);
    }

    Ok(HttpResponse::Ok().json(&*SALES_RECORDS))
}
