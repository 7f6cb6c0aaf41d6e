use serde::{Deserialize, Serialize};
use thiserror::Error;
use {crate::api::error::ServerError, http::StatusCode};

use super::error::Nothing;

macro_rules! response_error {
    ($name:ident {
        $(
            #[code($variant_code:expr)]
            #[error($($message:tt)*)]
            $variant:ident
            $({ $($var_struct_body_tt:tt)* })?
        ,)*
    }) => {

        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
        pub enum $name {
            $(
                #[error($($message)*)]
                $variant $({
                    $($var_struct_body_tt)*
                })?,
            )*
        }

        impl From<$name> for ServerError<$name> {
            fn from(inner: $name) -> Self {
                let code = match &inner {
                    $( $name::$variant { .. } => $variant_code, )*
                };
                Self::Inner { code, inner }
            }
        }
    };
}

// Validation failures are reported with a 200 and an `error` body, missing
// users with a 404

response_error!(CreateUserError {
    #[code(StatusCode::OK)]
    #[error("username is required.")]
    UsernameRequired,
});

response_error!(CreateExerciseError {
    #[code(StatusCode::NOT_FOUND)]
    #[error("Unknown userId")]
    UnknownUser,
    #[code(StatusCode::OK)]
    #[error("description is required.")]
    DescriptionRequired,
    #[code(StatusCode::OK)]
    #[error("duration is required.")]
    DurationRequired,
    #[code(StatusCode::OK)]
    #[error("duration must be a number.")]
    DurationInvalid,
    #[code(StatusCode::OK)]
    #[error("date is invalid.")]
    DateInvalid,
});

response_error!(LogError {
    #[code(StatusCode::NOT_FOUND)]
    #[error("Unknown userId")]
    UnknownUser,
    #[code(StatusCode::OK)]
    #[error("from is not a valid date.")]
    FromInvalid,
    #[code(StatusCode::OK)]
    #[error("to is not a valid date.")]
    ToInvalid,
    #[code(StatusCode::OK)]
    #[error("limit must be a positive integer.")]
    LimitInvalid,
});

response_error!(PayloadError {
    #[code(StatusCode::BAD_REQUEST)]
    #[error("{message}")]
    Malformed { message: String },
});

// Alias used to allow future expansion of the errors without having to go back
// and update all routes that use it
pub type FetchError = Nothing;

#[cfg(test)]
mod test {
    use http::StatusCode;

    use super::*;

    #[test]
    fn validation_errors_are_reported_with_ok() {
        let err = ServerError::from(CreateUserError::UsernameRequired);
        assert_eq!(err.code(), StatusCode::OK);
        assert_eq!(err.to_string(), "username is required.");

        let err = ServerError::from(LogError::LimitInvalid);
        assert_eq!(err.code(), StatusCode::OK);
    }

    #[test]
    fn unknown_users_are_not_found() {
        assert_eq!(
            ServerError::from(CreateExerciseError::UnknownUser).code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::from(LogError::UnknownUser).code(),
            StatusCode::NOT_FOUND
        );
    }
}
