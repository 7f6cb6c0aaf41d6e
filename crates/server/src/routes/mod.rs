use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

mod users;
pub use users::*;

mod exercises;
pub use exercises::*;

mod logs;
pub use logs::*;

/// Any origin unless one is configured
fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, anyhow::Error> {
    let layer = match origin {
        None => CorsLayer::permissive(),
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]),
    };
    Ok(layer)
}

pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let args = state.args.clone();

    let router = Router::new()
        .route(Object::Users.path(), get(list_users).post(create_user))
        .route(Object::UserExercises.path(), post(create_exercise))
        .route(Object::UserLogs.path(), get(fetch_log))
        .route_service("/", ServeFile::new(args.assets_dir.join("index.html")))
        .fallback_service(ServeDir::new(&args.assets_dir))
        .layer(RequestBodyLimitLayer::new(args.max_body_bytes))
        .layer(cors_layer(args.cors_origin.as_deref())?)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod test {
    use super::cors_layer;

    #[test]
    fn cors_origin_must_be_a_header_value() {
        assert!(cors_layer(None).is_ok());
        assert!(cors_layer(Some("https://www.freecodecamp.org")).is_ok());
        assert!(cors_layer(Some("bad\norigin")).is_err());
    }
}
