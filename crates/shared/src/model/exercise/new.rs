use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::{
        payloads::{CreateExercisePayload, FieldValue},
        response_errors::CreateExerciseError,
    },
    model::ValidateModel,
    utils::parse_timestamp,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExercise {
    pub description: String,
    pub duration: f64,
    /// Defaults to the time of insertion
    pub date: Option<DateTime<Utc>>,
}

fn parse_duration(value: FieldValue) -> Result<f64, CreateExerciseError> {
    let duration = match value {
        FieldValue::Number(v) => v,
        FieldValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(CreateExerciseError::DurationRequired);
            }
            text.parse::<f64>()
                .map_err(|_| CreateExerciseError::DurationInvalid)?
        }
    };

    // `inf` and `NaN` parse as floats but aren't durations
    if duration.is_finite() {
        Ok(duration)
    } else {
        Err(CreateExerciseError::DurationInvalid)
    }
}

impl ValidateModel for CreateExercisePayload {
    type Valid = NewExercise;
    type Error = CreateExerciseError;

    fn validate(self) -> Result<NewExercise, CreateExerciseError> {
        let description = match self.description {
            Some(description) if !description.trim().is_empty() => description,
            _ => return Err(CreateExerciseError::DescriptionRequired),
        };

        let duration = match self.duration {
            Some(duration) => parse_duration(duration)?,
            None => return Err(CreateExerciseError::DurationRequired),
        };

        // An empty date field is the same as leaving it out
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(date) => {
                Some(parse_timestamp(date).map_err(|_| CreateExerciseError::DateInvalid)?)
            }
        };

        Ok(NewExercise {
            description,
            duration,
            date,
        })
    }
}
