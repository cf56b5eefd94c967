use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use std::collections::BTreeMap;

use crate::database::ActivityRoster;
use crate::models::ActivityRecord;
use crate::services::activities_service::{self, Confirmation};
use crate::web::error::ApiError;

type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Last `email` value wins when the parameter is repeated.
fn require_email(query: QueryPairs) -> Result<String, ApiError> {
    let Query(pairs) = query?;
    pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
        .ok_or(ApiError::MissingEmail)
}

pub async fn list_activities_handler(
    State(roster): State<ActivityRoster>,
) -> Json<BTreeMap<String, ActivityRecord>> {
    Json(activities_service::list_activities(&roster))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    query: QueryPairs,
    State(roster): State<ActivityRoster>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = require_email(query)?;
    let confirmation = activities_service::signup(&roster, &activity_name, &email)?;
    Ok(Json(confirmation))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    query: QueryPairs,
    State(roster): State<ActivityRoster>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = require_email(query)?;
    let confirmation = activities_service::unregister(&roster, &activity_name, &email)?;
    Ok(Json(confirmation))
}
