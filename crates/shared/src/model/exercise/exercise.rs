use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{api::payloads::ExerciseResponse, model::User, types::Uuid, utils::format_log_date};
#[cfg(feature = "backend")]
use {
    crate::{
        api::{error::ServerError, response_errors::CreateExerciseError},
        model::{NewExercise, UserId},
    },
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
    tracing::instrument,
};

/// A logged exercise.
///
/// `username` is a copy of the owning user's name taken when the exercise is
/// created, there's no reference back to the user row. Log queries match on
/// it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", check("../../../../server/migrations/002-exercise/up.sql"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: f64,
    pub date: DateTime<Utc>,
}

impl Exercise {
    /// Response for the exercise, `_id` is the owning user's id
    pub fn to_response(&self, user: &User) -> ExerciseResponse {
        ExerciseResponse {
            username: self.username.clone(),
            description: self.description.clone(),
            duration: self.duration,
            date: format_log_date(&self.date),
            id: user.id,
        }
    }
}

#[cfg(feature = "backend")]
impl Exercise {
    fn select() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::Username,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<Exercise>, rusqlite::Error> {
        let (sql, values) = Self::select()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_row(&*values.as_params(), Exercise::from_row)
            .optional()?;
        Ok(res)
    }

    /// Inserts the exercise for `user`, copying the username onto it. A
    /// missing date is now
    #[instrument(skip(conn))]
    pub fn create(
        conn: &mut Connection,
        user: &User,
        new_exercise: NewExercise,
    ) -> Result<Exercise, rusqlite::Error> {
        let NewExercise {
            description,
            duration,
            date,
        } = new_exercise;

        let id = Uuid::new_v4();
        let tx = conn.transaction()?;
        let exercise = {
            Exercise {
                id,
                username: user.username.clone(),
                description,
                duration,
                date: date.unwrap_or_else(Utc::now),
            }
            .insert(&tx)?;
            Exercise::fetch_by_id(&tx, &id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(exercise)
    }

    /// Looks up the user and logs the exercise against them.
    ///
    /// The lookup and the insert aren't in one transaction. Users are never
    /// deleted so the user can't disappear in between.
    pub fn create_for_user(
        conn: &mut Connection,
        user_id: &UserId,
        new_exercise: NewExercise,
    ) -> Result<ExerciseResponse, ServerError<CreateExerciseError>> {
        let user = user_id
            .fetch_user(conn)?
            .ok_or(CreateExerciseError::UnknownUser)?;

        let exercise = Exercise::create(conn, &user, new_exercise)?;
        Ok(exercise.to_response(&user))
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::Exercise;
    use crate::{model::User, types::Uuid};

    #[test]
    fn response_carries_user_id_and_formatted_date() {
        let user = User {
            id: Uuid::new_v4(),
            username: "fcc_test".to_owned(),
        };
        let exercise = Exercise {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            description: "test run".to_owned(),
            duration: 30.0,
            date: Utc.with_ymd_and_hms(2023, 5, 15, 8, 45, 0).unwrap(),
        };

        let response = exercise.to_response(&user);
        assert_eq!(response.id, user.id);
        assert_eq!(response.username, "fcc_test");
        assert_eq!(response.date, "Mon May 15 2023");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["_id"], user.id.to_string());
        assert_eq!(json["duration"], 30);
    }
}
