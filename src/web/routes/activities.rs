use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityMap;
use crate::services::signup_service::{self, Confirmation};
use crate::web::error::ApiError;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    // The address is opaque; only absence or an empty value is rejected.
    fn require(self) -> Result<String, ApiError> {
        match self.email {
            Some(email) if !email.is_empty() => Ok(email),
            _ => Err(ApiError::MissingEmail),
        }
    }
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(signup_service::list_activities(&state.directory))
}

pub async fn signup_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = query.require()?;
    let confirmation = signup_service::sign_up(&state.directory, &activity_name, &email)?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = query.require()?;
    let confirmation = signup_service::unregister(&state.directory, &activity_name, &email)?;
    Ok(Json(confirmation))
}
