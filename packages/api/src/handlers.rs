use std::path::Path;

use axum::body::Bytes;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use orgchart_core::{build, filter_by_team, read_rows, validate, Hierarchy};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct FormatTeamQuery {
    #[serde(rename = "_q")]
    pub q: Option<String>,
}

type ErrorResponse = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": { "message": message } })),
    )
}

/// `POST /api/format-team`
///
/// Accepts a multipart CSV upload and responds with the nested team
/// hierarchy, optionally filtered down to the team named in `_q` (either a
/// query-string parameter or a multipart text field).
pub async fn format_team(
    State(_state): State<AppState>,
    Query(params): Query<FormatTeamQuery>,
    mut multipart: Multipart,
) -> Result<Json<Hierarchy>, ErrorResponse> {
    let mut file: Option<(String, Bytes)> = None;
    let mut query = params.q;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::warn!(error = %e, "failed to read multipart field");
        bad_request("Malformed multipart request.")
    })? {
        match field.name() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::warn!(error = %e, "failed to read uploaded file");
                    bad_request("Malformed multipart request.")
                })?;
                file = Some((filename, data));
            }
            // The query string takes precedence over the form field.
            Some("_q") if query.is_none() => {
                let text = field.text().await.map_err(|e| {
                    tracing::warn!(error = %e, "failed to read _q field");
                    bad_request("Malformed multipart request.")
                })?;
                query = Some(text);
            }
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        return Err(bad_request("No file was uploaded."));
    };

    let extension = Path::new(&filename)
        .extension()
        .and_then(|ext| ext.to_str());
    if extension != Some("csv") {
        return Err(bad_request("Please upload csv file."));
    }

    let rows = read_rows(data.as_ref()).map_err(|e| {
        tracing::warn!(error = %e, "rejected unparseable CSV upload");
        bad_request(&format!("Failed to parse CSV file: {e}"))
    })?;

    let errors = validate(&rows);
    if !errors.is_empty() {
        return Err((StatusCode::BAD_REQUEST, Json(json!({ "error": errors }))));
    }

    // Validation guarantees a single root; a failure here is a server bug,
    // not a client error.
    let mut hierarchy = build(&rows).map_err(|e| {
        tracing::error!(error = %e, "hierarchy build failed after validation passed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "message": e.to_string() } })),
        )
    })?;

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        hierarchy = filter_by_team(&hierarchy, &query);
    }

    Ok(Json(hierarchy))
}
