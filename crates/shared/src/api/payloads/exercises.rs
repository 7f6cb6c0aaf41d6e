use serde::{Deserialize, Serialize, Serializer};

use crate::types::Uuid;

/// Form fields arrive as text, json bodies may carry real numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateExercisePayload {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<FieldValue>,
    #[serde(default)]
    pub date: Option<String>,
}

impl CreateExercisePayload {
    pub fn new<D: Into<String>, V: Into<FieldValue>>(description: D, duration: V) -> Self {
        Self {
            description: Some(description.into()),
            duration: Some(duration.into()),
            date: None,
        }
    }

    pub fn with_date<T: Into<String>>(mut self, date: T) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// A freshly logged exercise, `_id` is the id of the user it was logged against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

/// Whole durations are written as integers, `30` rather than `30.0`
pub fn serialize_duration<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn durations_keep_their_fraction_only_when_they_have_one() {
        let mut response = ExerciseResponse {
            username: "fcc_test".to_owned(),
            description: "walk".to_owned(),
            duration: 30.0,
            date: "Mon May 15 2023".to_owned(),
            id: Uuid::new_v4(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["duration"], serde_json::json!(30));

        response.duration = 2.5;
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["duration"], serde_json::json!(2.5));
    }

    #[test]
    fn duration_field_takes_numbers_or_text() {
        let payload: CreateExercisePayload =
            serde_json::from_str(r#"{"description":"run","duration":25}"#).unwrap();
        assert_eq!(payload.duration, Some(FieldValue::Number(25.0)));

        let payload: CreateExercisePayload =
            serde_json::from_str(r#"{"description":"run","duration":"25"}"#).unwrap();
        assert_eq!(payload.duration, Some(FieldValue::Text("25".to_owned())));
    }
}
