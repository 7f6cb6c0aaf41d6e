use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use {
    crate::api::payloads::ErrorResponse,
    axum::{
        response::{IntoResponse, Response},
        Json,
    },
    tracing::{debug, error},
};

/// Placeholder inner error for routes that only fail with [`ServerError::Other`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Nothing {}

impl fmt::Display for Nothing {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Nothing {}

/// Error returned from every route.
///
/// `Inner` carries one of the per route errors declared with `response_error!`
/// along with the status code it maps to. `Other` is anything unexpected,
/// usually the store failing, and is always a 500.
#[derive(Debug)]
pub enum ServerError<T> {
    Inner { code: StatusCode, inner: T },
    Other { message: String },
}

impl<T> ServerError<T> {
    pub fn code(&self) -> StatusCode {
        match self {
            ServerError::Inner { code, .. } => *code,
            ServerError::Other { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn inner(&self) -> Option<&T> {
        match self {
            ServerError::Inner { inner, .. } => Some(inner),
            ServerError::Other { .. } => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ServerError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Inner { inner, .. } => write!(f, "{inner}"),
            ServerError::Other { message } => write!(f, "{message}"),
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for ServerError<T> {}

#[macro_export]
macro_rules! other_error {
    ($($tokens: tt)*) => {
        $crate::api::error::ServerError::Other { message: format!($($tokens)*) }
    };
}

#[cfg(feature = "backend")]
impl<T> From<rusqlite::Error> for ServerError<T> {
    fn from(err: rusqlite::Error) -> Self {
        other_error!("rusqlite::Error: {err}")
    }
}

#[cfg(feature = "backend")]
impl<T> From<deadpool_sqlite::InteractError> for ServerError<T> {
    fn from(err: deadpool_sqlite::InteractError) -> Self {
        other_error!("deadpool_sqlite::InteractError: {err}")
    }
}

#[cfg(feature = "backend")]
impl<T> From<deadpool_sqlite::PoolError> for ServerError<T> {
    fn from(err: deadpool_sqlite::PoolError) -> Self {
        other_error!("deadpool_sqlite::PoolError: {err}")
    }
}

// Every error is rendered as `{ "error": "..." }`. Callers are expected to look
// at the body rather than the status, some errors are deliberately a 200
#[cfg(feature = "backend")]
impl<T: fmt::Display> IntoResponse for ServerError<T> {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = self.to_string();

        if code.is_server_error() {
            error!(%code, error = %message, "Request failed");
        } else {
            debug!(%code, error = %message, "Request rejected");
        }

        (code, Json(ErrorResponse { error: message })).into_response()
    }
}
