//! The YAML list-of-records fixture layout

use super::Fixture;
use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFixture {
    input: Value,
    #[serde(default)]
    part_1: Value,
    #[serde(default)]
    part_2: Value,
}

#[derive(Serialize)]
struct FixtureRef<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    part_1: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    part_2: Option<&'a str>,
}

/// Stringify a scalar; `Ok(None)` for null or a missing field
fn scalar(value: Value, index: usize, field: &'static str) -> Result<Option<String>, FormatError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Tagged(tagged) => scalar(tagged.value, index, field),
        Value::Sequence(_) | Value::Mapping(_) => Err(FormatError::NonScalar { index, field }),
    }
}

/// Nothing but blank lines and comments
fn is_empty_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#'))
}

pub(super) fn parse(content: &str) -> Result<Vec<Fixture>, FormatError> {
    if is_empty_document(content) {
        return Ok(Vec::new());
    }
    let raw: Vec<RawFixture> =
        serde_yaml::from_str(content).map_err(|e| FormatError::Yaml(e.to_string()))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, record)| {
            let input = scalar(record.input, index, "input")?.ok_or_else(|| {
                FormatError::Yaml(format!("record {}: missing `input`", index))
            })?;
            Ok(Fixture {
                input,
                part_1: scalar(record.part_1, index, "part_1")?,
                part_2: scalar(record.part_2, index, "part_2")?,
            })
        })
        .collect()
}

pub(super) fn serialize(fixtures: &[Fixture]) -> Result<String, FormatError> {
    let records: Vec<FixtureRef<'_>> = fixtures
        .iter()
        .map(|f| FixtureRef {
            input: &f.input,
            part_1: f.part_1.as_deref(),
            part_2: f.part_2.as_deref(),
        })
        .collect();
    serde_yaml::to_string(&records).map_err(|e| FormatError::Yaml(e.to_string()))
}
