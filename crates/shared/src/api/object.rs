use const_format::concatcp;

use crate::{api::API_BASE_PATH, types::Uuid};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Object {
    Users,
    UserExercises,
    UserLogs,
}

impl Object {
    pub const fn path(&self) -> &str {
        use Object::*;
        match self {
            Users => concatcp!(API_BASE_PATH, "users"),
            UserExercises => concatcp!(API_BASE_PATH, "users/:id/exercises"),
            UserLogs => concatcp!(API_BASE_PATH, "users/:id/logs"),
        }
    }

    /// Path with the `:id` segment filled in
    pub fn path_for(&self, id: &Uuid) -> String {
        self.path().replace(":id", &id.hyphenated().to_string())
    }
}
