use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use nninv_review::export_markdown;

use crate::error::ApiError;
use crate::state::SharedState;

pub const EXPORT_FILENAME: &str = "entity_pairs_export.md";

/// All pairs as a downloadable markdown table.
pub async fn export(State(state): State<SharedState>) -> Result<impl IntoResponse, ApiError> {
    let pairs = state.workflow.list().await?;
    let body = export_markdown(&pairs);
    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment;filename={EXPORT_FILENAME}")),
        ],
        body,
    ))
}
