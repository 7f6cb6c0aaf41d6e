use chrono::{NaiveDate, TimeZone, Utc};
use exercise_tracker::db::migrate;
use rusqlite::Connection;
use shared::{
    api::{
        error::ServerError,
        response_errors::{CreateExerciseError, LogError},
    },
    model::{Exercise, LogQuery, LogRecord, NewExercise, NewUser, User, UserId},
    types::Uuid,
    utils::DateRange,
};

fn connection() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    migrate(&mut conn).unwrap();
    conn
}

fn new_user(conn: &mut Connection, username: &str) -> User {
    User::create(
        conn,
        NewUser {
            username: username.to_owned(),
        },
    )
    .unwrap()
}

fn log(conn: &mut Connection, user: &User, description: &str, y: i32, m: u32, d: u32) {
    Exercise::create(
        conn,
        user,
        NewExercise {
            description: description.to_owned(),
            duration: 10.0,
            date: Some(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()),
        },
    )
    .unwrap();
}

fn descriptions(records: Vec<LogRecord>) -> Vec<String> {
    records.into_iter().map(|r| r.description).collect()
}

#[test]
fn users_round_trip() {
    let mut conn = connection();
    let first = new_user(&mut conn, "first");
    let second = new_user(&mut conn, "second");

    assert_eq!(
        User::fetch_by_id(&conn, &first.id).unwrap(),
        Some(first.clone())
    );
    assert_eq!(User::fetch_by_id(&conn, &Uuid::new_v4()).unwrap(), None);
    assert_eq!(User::fetch_all(&conn).unwrap(), vec![first, second]);
}

#[test]
fn exercise_copies_username_and_defaults_date() {
    let mut conn = connection();
    let user = new_user(&mut conn, "copycat");

    let before = Utc::now();
    let exercise = Exercise::create(
        &mut conn,
        &user,
        NewExercise {
            description: "walk".to_owned(),
            duration: 15.0,
            date: None,
        },
    )
    .unwrap();

    assert_eq!(exercise.username, "copycat");
    assert!(exercise.date >= before && exercise.date <= Utc::now());
    assert_eq!(
        Exercise::fetch_by_id(&conn, &exercise.id).unwrap(),
        Some(exercise)
    );
}

#[test]
fn exercise_for_unknown_user_is_rejected() {
    let mut conn = connection();
    let user_id = UserId { id: Uuid::new_v4() };

    let err = Exercise::create_for_user(
        &mut conn,
        &user_id,
        NewExercise {
            description: "ghost".to_owned(),
            duration: 1.0,
            date: None,
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ServerError::Inner {
            inner: CreateExerciseError::UnknownUser,
            ..
        }
    ));
}

#[test]
fn log_records_follow_range_and_limit() {
    let mut conn = connection();
    let user = new_user(&mut conn, "ranger");
    let other = new_user(&mut conn, "other");

    log(&mut conn, &user, "jan", 2023, 1, 10);
    log(&mut conn, &other, "theirs", 2023, 1, 20);
    log(&mut conn, &user, "feb", 2023, 2, 10);
    log(&mut conn, &user, "mar", 2023, 3, 10);

    let all = LogRecord::fetch(&conn, "ranger", &LogQuery::default()).unwrap();
    assert_eq!(descriptions(all), ["jan", "feb", "mar"]);

    let query = LogQuery {
        range: DateRange::new(
            NaiveDate::from_ymd_opt(2023, 2, 1),
            NaiveDate::from_ymd_opt(2023, 3, 10),
        ),
        limit: None,
    };
    let ranged = LogRecord::fetch(&conn, "ranger", &query).unwrap();
    assert_eq!(descriptions(ranged), ["feb", "mar"]);

    let query = LogQuery {
        range: DateRange::default(),
        limit: Some(1),
    };
    let limited = LogRecord::fetch(&conn, "ranger", &query).unwrap();
    assert_eq!(descriptions(limited), ["jan"]);
}

#[test]
fn exercise_log_counts_entries() {
    let mut conn = connection();
    let user = new_user(&mut conn, "counter");
    log(&mut conn, &user, "one", 2024, 1, 1);
    log(&mut conn, &user, "two", 2024, 1, 2);

    let exercise_log =
        shared::api::payloads::ExerciseLog::fetch(&conn, &UserId::from(&user), &LogQuery::default())
            .unwrap();
    assert_eq!(exercise_log.username, "counter");
    assert_eq!(exercise_log.count, 2);
    assert_eq!(exercise_log.log[0].date, "Mon Jan 01 2024");

    let err = shared::api::payloads::ExerciseLog::fetch(
        &conn,
        &UserId { id: Uuid::new_v4() },
        &LogQuery::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ServerError::Inner {
            inner: LogError::UnknownUser,
            ..
        }
    ));
}
