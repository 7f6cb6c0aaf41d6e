use std::{fmt, ops::Deref};

#[cfg(feature = "backend")]
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{model::User, types::Uuid};

/// Id of a user as taken from a request path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserId {
    pub id: Uuid,
}

impl UserId {
    /// `None` if the value can't be a user id at all, such a user can't exist
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse(value).ok().map(|id| Self { id })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id.as_hyphenated())
    }
}

impl Deref for UserId {
    type Target = Uuid;
    fn deref(&self) -> &Self::Target {
        &self.id
    }
}

impl From<&User> for UserId {
    fn from(value: &User) -> Self {
        Self { id: value.id }
    }
}

#[cfg(feature = "backend")]
impl UserId {
    pub fn fetch_user(&self, conn: &Connection) -> Result<Option<User>, rusqlite::Error> {
        User::fetch_by_id(conn, &self.id)
    }
}
