//! Landing page listing and pair deletion.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use minijinja::context;
use nninv_db::EntityPair;
use serde::Serialize;

use crate::error::ApiError;
use crate::flash::Flash;
use crate::handlers::render;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
struct ListingStats {
    pairs: usize,
    evaluated: usize,
    pending: usize,
}

impl ListingStats {
    fn of(pairs: &[EntityPair]) -> Self {
        let evaluated = pairs.iter().filter(|p| p.evaluation.is_some()).count();
        Self { pairs: pairs.len(), evaluated, pending: pairs.len() - evaluated }
    }
}

pub async fn index(
    State(state): State<SharedState>,
    Query(flash): Query<Flash>,
) -> Result<Html<String>, ApiError> {
    let pairs = state.workflow.list().await?;
    let stats = ListingStats::of(&pairs);
    render(&state, "index.html", context! { pairs, stats, flash })
}

pub async fn delete_pair(State(state): State<SharedState>, Path(id): Path<i64>) -> Result<Redirect, ApiError> {
    let flash = if state.workflow.delete_pair(id).await? {
        Flash::success("Pair deleted successfully")
    } else {
        Flash::error("Pair not found")
    };
    Ok(flash.redirect("/"))
}
