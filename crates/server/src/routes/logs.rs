use axum::{extract::Path, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{ExerciseLog, LogParams},
        response_errors::LogError,
    },
    model::{UserId, ValidateModel},
};
use tracing::instrument;

use crate::{db::DatabaseConnection, extract::QueryParams};

#[instrument]
pub async fn fetch_log(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    QueryParams(params): QueryParams<LogParams>,
) -> Result<Json<ExerciseLog>, ServerError<LogError>> {
    let user_id = UserId::parse(&id).ok_or(LogError::UnknownUser)?;
    let query = params.validate()?;

    let log = conn
        .interact(move |conn| ExerciseLog::fetch(conn, &user_id, &query))
        .await??;

    Ok(Json(log))
}
