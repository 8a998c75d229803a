//! Add-pair form.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use minijinja::context;
use nninv_review::{NewPairForm, ReviewError};

use crate::error::ApiError;
use crate::flash::Flash;
use crate::handlers::render;
use crate::state::SharedState;

pub async fn add_page(
    State(state): State<SharedState>,
    Query(flash): Query<Flash>,
) -> Result<Html<String>, ApiError> {
    render(&state, "add_pair.html", context! { flash })
}

pub async fn add_submit(
    State(state): State<SharedState>,
    Form(form): Form<NewPairForm>,
) -> Result<Redirect, ApiError> {
    match state.workflow.add_pair(form).await {
        Ok(pair) => Ok(Flash::success(format!("Added new pair: {}", pair.entity_name))
            .redirect(&format!("/pair/{}", pair.id))),
        Err(ReviewError::Validation(msg)) => Ok(Flash::error(msg).redirect("/add")),
        Err(e) => Err(e.into()),
    }
}
