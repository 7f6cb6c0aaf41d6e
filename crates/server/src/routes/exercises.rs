use axum::{extract::Path, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{CreateExercisePayload, ExerciseResponse},
        response_errors::CreateExerciseError,
    },
    model::{Exercise, UserId, ValidateModel},
};
use tracing::instrument;

use crate::{db::DatabaseConnection, extract::Payload};

#[instrument]
pub async fn create_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    Path(id): Path<String>,
    Payload(payload): Payload<CreateExercisePayload>,
) -> Result<Json<ExerciseResponse>, ServerError<CreateExerciseError>> {
    let user_id = UserId::parse(&id).ok_or(CreateExerciseError::UnknownUser)?;
    let new_exercise = payload.validate()?;

    let exercise = conn
        .interact(move |conn| Exercise::create_for_user(conn, &user_id, new_exercise))
        .await??;

    Ok(Json(exercise))
}
