/// Data models for Sales Service
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, Result};

/// A single sales entry returned by `GET /sales`
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SalesRecord {
    #[schema(example = 1)]
    pub id: i64,
    /// ISO-8601 calendar date
    #[schema(format = Date, example = "2024-07-03")]
    pub date: String,
    /// Amount in currency units
    #[schema(example = 123.45)]
    pub amount: f64,
}

impl SalesRecord {
    fn new(id: i64, date: &str, amount: f64) -> Self {
        Self {
            id,
            date: date.to_string(),
            amount,
        }
    }
}

/// The record set served for every valid request. Never mutated.
pub static SALES_RECORDS: Lazy<Vec<SalesRecord>> = Lazy::new(|| {
    vec![
        SalesRecord::new(1, "2024-07-01", 100.00),
        SalesRecord::new(2, "2024-07-02", 200.00),
        SalesRecord::new(3, "2024-07-03", 300.00),
    ]
});

/// Query parameters for GET /sales
///
/// All three are required but none of them influences the response.
/// Built from the raw query pairs so a repeated key is accepted; the first
/// non-empty occurrence wins.
#[derive(Debug, Default)]
pub struct SalesQuery {
    /// The number of days
    pub days: Option<String>,

    /// The columns to include
    pub columns: Option<String>,

    /// The resources to include
    pub resources: Option<String>,
}

impl SalesQuery {
    pub const REQUIRED_PARAMETERS: [&'static str; 3] = ["days", "columns", "resources"];

    /// Names of required parameters that are absent or empty
    pub fn missing_parameters(&self) -> Vec<&'static str> {
        let values = [&self.days, &self.columns, &self.resources];

        Self::REQUIRED_PARAMETERS
            .into_iter()
            .zip(values)
            .filter(|(_, value)| !is_present(value))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.missing_parameters().is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingParameters)
        }
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl FromIterator<(String, String)> for SalesQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = SalesQuery::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "days" => &mut query.days,
                "columns" => &mut query.columns,
                "resources" => &mut query.resources,
                _ => continue,
            };
            if !is_present(slot) {
                *slot = Some(value);
            }
        }

        query
    }
}

/// Error body shared by every failing response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Missing required parameters")]
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "sales-service")]
    pub service: String,
    pub version: String,
}
