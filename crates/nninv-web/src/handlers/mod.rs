//! HTTP handlers for all web routes.

pub mod add;
pub mod export;
pub mod health;
pub mod investigate;
pub mod lookup;
pub mod pairs;

use axum::response::Html;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Render a named page template with `ctx`.
pub(crate) fn render<S: Serialize>(state: &AppState, name: &str, ctx: S) -> Result<Html<String>, ApiError> {
    let template = state.templates.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}
