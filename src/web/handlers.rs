//! HTTP handlers: one request, one computation, no shared state.

use std::collections::HashSet;

use axum::{
    extract::{Form, Multipart},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::calc::compute_daily_target;
use crate::error::ClaimsError;
use crate::export::{to_xlsx_bytes, MERGED_FILENAME, XLSX_MIME};
use crate::ingest::load_report;
use crate::table::{merge_reports, normalize_insurer_column, Report};

use super::pages;

pub async fn index() -> Html<String> {
    Html(pages::index_page())
}

#[derive(Debug, Deserialize)]
pub struct CalculatorForm {
    pub daily_inflow: f64,
    pub pending_backlog: f64,
    pub target_months: f64,
}

pub async fn calculator(Form(form): Form<CalculatorForm>) -> Response {
    match compute_daily_target(form.daily_inflow, form.pending_backlog, form.target_months) {
        Ok(target) => {
            info!(
                daily_target = target,
                months = form.target_months,
                "computed daily target"
            );
            Html(pages::calculator_result_page(form.target_months, target)).into_response()
        }
        Err(err) => rejected(&err),
    }
}

/// Merge uploaded reports into one workbook. `report` parts are ingested in
/// upload order; a non-blank `allowed_insurers` field turns on the insurer
/// normalization pass after the merge.
pub async fn merge(mut multipart: Multipart) -> Response {
    let mut reports: Vec<Report> = Vec::new();
    let mut allow_list: HashSet<String> = HashSet::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(err) => return malformed(&err.to_string()),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "report" => {
                let filename = field.file_name().map(str::to_string).unwrap_or_default();
                // Browsers submit an empty part when no file was picked.
                if filename.is_empty() {
                    continue;
                }
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(err) => return malformed(&err.to_string()),
                };
                match load_report(&filename, &bytes) {
                    Ok(report) => reports.push(report),
                    Err(err) => return rejected(&err),
                }
            }
            "allowed_insurers" => {
                let text = match field.text().await {
                    Ok(text) => text,
                    Err(err) => return malformed(&err.to_string()),
                };
                allow_list = text
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            _ => {}
        }
    }

    let merged = match merge_reports(&reports) {
        Ok(table) => table,
        Err(err) => return rejected(&err),
    };

    let table = if allow_list.is_empty() {
        merged
    } else {
        match normalize_insurer_column(&merged, &allow_list) {
            Ok(table) => table,
            Err(err) => return rejected(&err),
        }
    };

    match to_xlsx_bytes(&table) {
        Ok(bytes) => {
            info!(
                rows = table.row_count(),
                bytes = bytes.len(),
                "serving merged workbook"
            );
            (
                [
                    (header::CONTENT_TYPE, XLSX_MIME.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{MERGED_FILENAME}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(%err, "workbook serialization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::error_page(&err.to_string())),
            )
                .into_response()
        }
    }
}

pub async fn status() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "data": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "server_time": Utc::now().timestamp(),
        }
    }))
}

fn rejected(err: &ClaimsError) -> Response {
    warn!(%err, "request rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(pages::error_page(&err.to_string())),
    )
        .into_response()
}

fn malformed(detail: &str) -> Response {
    warn!(detail, "malformed multipart body");
    (
        StatusCode::BAD_REQUEST,
        Html(pages::error_page("could not read the uploaded form")),
    )
        .into_response()
}
