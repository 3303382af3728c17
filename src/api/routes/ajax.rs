//! AJAX Route
//!
//! - POST /ajax - Form-encoded request, JSON reply

use axum::{extract::State, Form, Json};
use std::sync::Arc;

use crate::api::dto::{AjaxForm, AppData};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dispatch::MENU_JOB;

/// POST /ajax
///
/// `job=loadMenuItems` answers the menu bootstrap, `id=<code>` an icon
/// action and `state=<s>` a page trigger. Checked in that order.
pub async fn handle_ajax(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AjaxForm>,
) -> ApiResult<Json<AppData>> {
    tracing::info!(
        state = form.state.as_deref().unwrap_or(""),
        id = form.id.as_deref().unwrap_or(""),
        job = form.job.as_deref().unwrap_or(""),
        row = form.row.as_deref().unwrap_or(""),
        "AJAX request"
    );

    let mut data = if let Some(job) = form.job.as_deref() {
        if job != MENU_JOB {
            return Err(ApiError::Validation(format!("Unknown job: {}", job)));
        }
        state.app_data("home")
    } else if let Some(id) = form.id.as_deref() {
        let mut data = state.app_data(form.state.as_deref().unwrap_or("home"));
        data.command = Some(id.to_string());
        data
    } else if let Some(page_state) = form.state.as_deref() {
        state.app_data(page_state)
    } else {
        return Err(ApiError::Validation(
            "Expected one of: job, id, state".to_string(),
        ));
    };

    data.row = form.row;
    Ok(Json(data))
}
