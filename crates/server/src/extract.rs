use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use serde::de::DeserializeOwned;
use shared::api::{error::ServerError, response_errors::PayloadError};

/// Request body sent either as a urlencoded form or as json, chosen by the
/// content type. A request without a form content type, e.g. an empty POST,
/// yields the payload's default so the route can report the missing fields
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .map_or(false, |mime| {
            mime.type_() == "application"
                && (mime.subtype() == "json" || mime.suffix().map_or(false, |s| s == "json"))
        })
}

fn malformed(message: String) -> ServerError<PayloadError> {
    PayloadError::Malformed { message }.into()
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ServerError<PayloadError>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| malformed(e.body_text()))?;
            return Ok(Payload(value));
        }

        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Payload(value)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(Payload(T::default())),
            Err(e) => Err(malformed(e.body_text())),
        }
    }
}

/// Query string whose deserialization failures are reported like a malformed
/// body
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError<PayloadError>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| malformed(e.body_text()))?;
        Ok(QueryParams(value))
    }
}
