//! NDJSON parser for people-search responses.
//!
//! This module provides pure parsing functions for converting the body of a
//! streamed search response into validated [`Person`] records.

use crate::model::{Person, ResultSet, TransportError};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw JSON structure for one streamed search record.
///
/// Fields are kept as untyped values so a record with an odd field shape is
/// still shown: text fields that are not strings become empty, a location
/// without a string `name` becomes "Unknown", skills that are neither a
/// string nor an object with a string `name` are dropped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPerson {
    name: Option<Value>,
    professional_headline: Option<Value>,
    location: Option<Value>,
    skills: Option<Value>,
}

fn as_text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Skills arrive either as bare strings or as objects with a `name`.
fn skill_name(skill: &Value) -> Option<String> {
    match skill {
        Value::String(name) => Some(name.clone()),
        Value::Object(fields) => as_text(fields.get("name")),
        _ => None,
    }
}

impl From<RawPerson> for Person {
    fn from(raw: RawPerson) -> Self {
        let skills: Vec<String> = raw
            .skills
            .as_ref()
            .and_then(Value::as_array)
            .map(|skills| skills.iter().filter_map(skill_name).collect())
            .unwrap_or_default();

        Person::new(
            as_text(raw.name.as_ref()).unwrap_or_default(),
            as_text(raw.professional_headline.as_ref()).unwrap_or_default(),
            as_text(raw.location.as_ref().and_then(|l| l.get("name"))),
            skills,
        )
    }
}

/// Parse a single NDJSON line into a [`Person`].
///
/// The line must hold exactly one JSON object.
///
/// # Errors
///
/// Returns [`TransportError::MalformedLine`] if the line is not a JSON object.
pub fn parse_person_line(line: &str, line_number: usize) -> Result<Person, TransportError> {
    let malformed = |e: serde_json::Error| TransportError::MalformedLine {
        line_number,
        message: e.to_string(),
    };

    let object: Map<String, Value> = serde_json::from_str(line).map_err(malformed)?;
    let raw = RawPerson::deserialize(Value::Object(object)).map_err(malformed)?;
    Ok(raw.into())
}

/// Parse a complete NDJSON response body.
///
/// Blank lines are skipped. Records keep their line order. Parsing is
/// all-or-nothing: the first malformed line fails the whole body, so a
/// caller never sees partial results.
///
/// # Errors
///
/// Returns the [`TransportError::MalformedLine`] of the first bad line.
pub fn parse_people(body: &str) -> Result<ResultSet, TransportError> {
    body.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_person_line(line, index + 1))
        .collect()
}
