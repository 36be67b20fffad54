use axum::{
    extract::{Path, State},
    Json,
};

use crate::careers::catalog::{get_career_detail, list_career_details};
use crate::errors::AppError;
use crate::models::career::CareerDetailRow;
use crate::state::AppState;

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerDetailRow>>, AppError> {
    Ok(Json(list_career_details(&state.db).await?))
}

/// GET /api/v1/careers/:name
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CareerDetailRow>, AppError> {
    let career = get_career_detail(&state.db, &name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Career '{name}' not found")))?;
    Ok(Json(career))
}
