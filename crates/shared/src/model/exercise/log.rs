use std::num::IntErrorKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::{
        payloads::{LogEntry, LogParams},
        response_errors::LogError,
    },
    model::ValidateModel,
    utils::{format_log_date, parse_calendar_date, DateRange},
};
#[cfg(feature = "backend")]
use {
    crate::{
        api::{error::ServerError, payloads::ExerciseLog},
        model::{ExerciseIden, UserId},
    },
    exemplar::Model,
    rusqlite::Connection,
    sea_query::{Alias, Expr, Order, Query, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
    tracing::{debug, instrument},
};

/// Filters for a user's exercise log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub range: DateRange,
    /// Never zero
    pub limit: Option<u32>,
}

// Empty query values (`?from=&limit=`) count as missing
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// Limits past what can be stored are as good as no limit
fn parse_limit(value: &str) -> Result<u32, LogError> {
    let limit = match value.parse::<u64>() {
        Ok(limit) => limit,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => return Err(LogError::LimitInvalid),
    };
    if limit == 0 {
        return Err(LogError::LimitInvalid);
    }
    Ok(u32::try_from(limit).unwrap_or(u32::MAX))
}

impl ValidateModel for LogParams {
    type Valid = LogQuery;
    type Error = LogError;

    fn validate(self) -> Result<LogQuery, LogError> {
        let from = present(&self.from)
            .map(|v| parse_calendar_date(v).map_err(|_| LogError::FromInvalid))
            .transpose()?;
        let to = present(&self.to)
            .map(|v| parse_calendar_date(v).map_err(|_| LogError::ToInvalid))
            .transpose()?;
        let limit = present(&self.limit).map(parse_limit).transpose()?;

        Ok(LogQuery {
            range: DateRange::new(from, to),
            limit,
        })
    }
}

/// The projection of an exercise that makes it into the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
pub struct LogRecord {
    pub description: String,
    pub duration: f64,
    pub date: DateTime<Utc>,
}

impl From<LogRecord> for LogEntry {
    fn from(record: LogRecord) -> Self {
        LogEntry {
            date: format_log_date(&record.date),
            description: record.description,
            duration: record.duration,
        }
    }
}

#[cfg(feature = "backend")]
impl LogRecord {
    /// Exercises logged under `username` that fall inside the query's range,
    /// oldest insert first, capped at the query's limit.
    ///
    /// Dates are compared through `julianday` so the comparison doesn't depend
    /// on the text layout the timestamps were stored with
    pub fn fetch(
        conn: &Connection,
        username: &str,
        query: &LogQuery,
    ) -> Result<Vec<LogRecord>, rusqlite::Error> {
        let mut select = Query::select();
        select
            .columns([
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::Username).eq(username));

        if let Some(lower) = query.range.lower_bound() {
            select.and_where(Expr::cust_with_values(
                r#"julianday("date") >= julianday(?)"#,
                [lower.to_rfc3339()],
            ));
        }
        if let Some(upper) = query.range.upper_bound() {
            select.and_where(Expr::cust_with_values(
                r#"julianday("date") < julianday(?)"#,
                [upper.to_rfc3339()],
            ));
        }
        if let Some(limit) = query.limit {
            select.limit(limit.into());
        }

        let (sql, values) = select
            .order_by(Alias::new("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);
        debug!(%sql, "Fetching log records");

        let mut stmt = conn.prepare_cached(&sql)?;
        let records = stmt
            .query_map(&*values.as_params(), LogRecord::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(records)
    }
}

#[cfg(feature = "backend")]
impl ExerciseLog {
    /// Resolves the user then builds their log
    #[instrument(skip(conn))]
    pub fn fetch(
        conn: &Connection,
        user_id: &UserId,
        query: &LogQuery,
    ) -> Result<ExerciseLog, ServerError<LogError>> {
        let user = user_id.fetch_user(conn)?.ok_or(LogError::UnknownUser)?;

        let log = LogRecord::fetch(conn, &user.username, query)?
            .into_iter()
            .map(LogEntry::from)
            .collect();

        Ok(ExerciseLog::new(user.username, log))
    }
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn params(from: &str, to: &str, limit: &str) -> LogParams {
        LogParams {
            from: Some(from.to_owned()),
            to: Some(to.to_owned()),
            limit: Some(limit.to_owned()),
        }
    }

    #[test]
    fn no_params_is_unbounded() {
        let query = LogParams::default().validate().unwrap();
        assert!(query.range.is_unbounded());
        assert_eq!(query.limit, None);

        // Empty values are dropped rather than rejected
        assert_eq!(params("", " ", "").validate().unwrap(), query);
    }

    #[test]
    fn parses_all_params() {
        let query = params("2023-05-01", "2023-05-31", "3").validate().unwrap();
        assert_eq!(query.range.from, NaiveDate::from_ymd_opt(2023, 5, 1));
        assert_eq!(query.range.to, NaiveDate::from_ymd_opt(2023, 5, 31));
        assert_eq!(query.limit, Some(3));
    }

    #[test]
    fn oversized_limits_saturate() {
        for limit in ["5000000000", "99999999999999999999999"] {
            assert_eq!(
                params("", "", limit).validate().unwrap().limit,
                Some(u32::MAX)
            );
        }
    }

    #[test]
    fn rejects_bad_params() {
        assert_eq!(
            params("May", "", "").validate(),
            Err(LogError::FromInvalid)
        );
        assert_eq!(
            params("", "2023-02-30", "").validate(),
            Err(LogError::ToInvalid)
        );
        for limit in ["0", "-1", "ten", "1.5"] {
            assert_eq!(
                params("", "", limit).validate(),
                Err(LogError::LimitInvalid)
            );
        }
    }

    #[test]
    fn record_becomes_entry_with_calendar_date() {
        let entry = LogEntry::from(LogRecord {
            description: "test run".to_owned(),
            duration: 30.0,
            date: Utc.with_ymd_and_hms(2023, 5, 15, 18, 0, 0).unwrap(),
        });
        assert_eq!(
            entry,
            LogEntry {
                description: "test run".to_owned(),
                duration: 30.0,
                date: "Mon May 15 2023".to_owned(),
            }
        );
    }
}
