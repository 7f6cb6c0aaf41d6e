use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use deadpool_sqlite::{Object, Pool};
use shared::api::error::{Nothing, ServerError};

/// A pooled connection checked out for the duration of a request
#[derive(Debug)]
pub struct DatabaseConnection(pub Object);

impl From<Object> for DatabaseConnection {
    fn from(conn: Object) -> Self {
        DatabaseConnection(conn)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for DatabaseConnection
where
    S: Send + Sync,
    Pool: FromRef<S>,
{
    type Rejection = ServerError<Nothing>;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = Pool::from_ref(state);

        // Get connection from the pool
        let conn = pool.get().await?;

        Ok(conn.into())
    }
}

#[cfg(test)]
mod test {
    use axum::{extract::FromRequestParts, http::Request};

    use super::DatabaseConnection;
    use crate::db::create_pool;

    #[tokio::test]
    async fn checks_out_a_usable_connection() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_pool(dir.path().join("test.sqlite").to_str().unwrap()).unwrap();
        let (mut parts, _) = Request::get("/").body(()).unwrap().into_parts();

        let DatabaseConnection(conn) = DatabaseConnection::from_request_parts(&mut parts, &pool)
            .await
            .unwrap();
        let one = conn
            .interact(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(one, 1);
    }
}
