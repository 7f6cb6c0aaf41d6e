use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::CreateUserPayload,
        response_errors::{CreateUserError, FetchError},
    },
    model::{User, ValidateModel},
};
use tracing::{info, instrument};

use crate::{db::DatabaseConnection, extract::Payload};

#[instrument]
pub async fn list_users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<Vec<User>>, ServerError<FetchError>> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;
    Ok(Json(users))
}

#[instrument]
pub async fn create_user(
    DatabaseConnection(conn): DatabaseConnection,
    Payload(payload): Payload<CreateUserPayload>,
) -> Result<Json<User>, ServerError<CreateUserError>> {
    let new_user = payload.validate()?;

    let user = conn
        .interact(move |conn| User::create(conn, new_user))
        .await??;
    info!(id = %user.id, username = %user.username, "Created user");

    Ok(Json(user))
}
