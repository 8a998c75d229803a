//! Investigation page and evaluation form.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use minijinja::context;
use nninv_db::Evaluation;
use nninv_review::{EvaluationSubmission, ReviewError};

use crate::error::ApiError;
use crate::flash::Flash;
use crate::handlers::render;
use crate::state::{AppState, SharedState};

const PAIR_NOT_FOUND: &str = "Pair not found";

/// Investigation page for `id`, or a redirect home if the pair is gone.
async fn page(state: &AppState, id: i64, flash: Flash) -> Result<Response, ApiError> {
    let inv = match state.workflow.investigate(id).await {
        Ok(inv) => inv,
        Err(ReviewError::NotFound(_)) => return Ok(Flash::error(PAIR_NOT_FOUND).redirect("/").into_response()),
        Err(e) => return Err(e.into()),
    };
    let evaluations: Vec<&str> = Evaluation::ALL.iter().map(Evaluation::as_str).collect();
    Ok(render(state, "investigate.html", context! { inv, evaluations, flash })?.into_response())
}

pub async fn investigate_page(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Query(flash): Query<Flash>,
) -> Result<Response, ApiError> {
    page(&state, id, flash).await
}

pub async fn submit_evaluation(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Form(submission): Form<EvaluationSubmission>,
) -> Result<Response, ApiError> {
    match state.workflow.submit_evaluation(id, submission).await {
        Ok(_) => Ok(Flash::success("Evaluation saved").redirect(&format!("/pair/{id}")).into_response()),
        Err(ReviewError::Validation(msg)) => {
            let mut resp = page(&state, id, Flash::error(msg)).await?;
            if resp.status().is_success() {
                *resp.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
            }
            Ok(resp)
        }
        Err(ReviewError::NotFound(_)) => Ok(Flash::error(PAIR_NOT_FOUND).redirect("/").into_response()),
        Err(e) => Err(e.into()),
    }
}
