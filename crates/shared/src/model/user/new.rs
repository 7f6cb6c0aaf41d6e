use serde::{Deserialize, Serialize};

use crate::{
    api::{payloads::CreateUserPayload, response_errors::CreateUserError},
    model::ValidateModel,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
}

impl NewUser {
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl ValidateModel for CreateUserPayload {
    type Valid = NewUser;
    type Error = CreateUserError;

    fn validate(self) -> Result<NewUser, CreateUserError> {
        match self.username {
            Some(username) if !username.trim().is_empty() => Ok(NewUser::new(username)),
            _ => Err(CreateUserError::UsernameRequired),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn username_is_kept_as_given() {
        let new_user = CreateUserPayload::new("fcc_test").validate().unwrap();
        assert_eq!(new_user, NewUser::new("fcc_test"));
    }

    #[test]
    fn missing_or_blank_username_is_rejected() {
        for payload in [
            CreateUserPayload::default(),
            CreateUserPayload::new(""),
            CreateUserPayload::new("   "),
        ] {
            assert_eq!(payload.validate(), Err(CreateUserError::UsernameRequired));
        }
    }
}
