use serde::{Deserialize, Serialize};

use crate::types::Uuid;
#[cfg(feature = "backend")]
use {
    crate::model::NewUser,
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Alias, Expr, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
    tracing::instrument,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
#[cfg_attr(feature = "backend", check("../../../../server/migrations/001-user/up.sql"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

#[cfg(feature = "backend")]
impl User {
    fn select() -> SelectStatement {
        Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select()
            .and_where(Expr::col(UserIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt
            .query_row(&*values.as_params(), User::from_row)
            .optional()?;
        Ok(user)
    }

    /// Every user in the order they were created
    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Self::select()
            .order_by(Alias::new("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    #[instrument(skip(conn))]
    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, rusqlite::Error> {
        let id = Uuid::new_v4();
        let tx = conn.transaction()?;
        let user = {
            User {
                id,
                username: new_user.username,
            }
            .insert(&tx)?;
            User::fetch_by_id(&tx, &id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(user)
    }
}

#[cfg(test)]
mod test {
    use super::User;
    use crate::types::Uuid;

    #[test]
    fn id_is_serialized_as_underscore_id() {
        let user = User {
            id: Uuid::new_v4(),
            username: "fcc_test".to_owned(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["_id"], user.id.to_string());
        assert_eq!(value["username"], "fcc_test");
        assert!(value.get("id").is_none());
    }
}
