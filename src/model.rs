//! Record types for TheMealDB responses.
//!
//! The service does not publish a stable schema (meal objects alone carry
//! twenty numbered `strIngredientN`/`strMeasureN` fields that appear and
//! disappear between records), so results are kept as raw JSON objects and
//! read on demand. Typed deserialization exists only for the two fields the
//! list endpoints project into plain strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MealDbError;

/// A single record returned by the API: one meal, category, ingredient or
/// area, depending on the endpoint it came from.
///
/// Fields pass through exactly as the server sent them; nothing is renamed,
/// dropped or converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Returns the raw JSON value stored under `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the string stored under `field`.
    ///
    /// `None` when the field is absent or not a string. TheMealDB encodes
    /// almost everything as strings, even meal ids, so this is the accessor
    /// you want most of the time.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Iterates over all fields of the record.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// One row of `list.php?c=list`. Only the name is read; everything else a
/// future API version might add is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryName {
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// One row of `list.php?a=list`.
#[derive(Debug, Deserialize)]
pub(crate) struct AreaName {
    #[serde(rename = "strArea")]
    pub name: String,
}

/// True when `value` is the "no results" marker the service uses: JSON
/// `null` or an empty string. An empty array is not the marker; it is a
/// real, if empty, result.
pub(crate) fn is_empty_sentinel(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Deserializes an expected field into the full list of records.
pub(crate) fn extract_records(value: Value) -> Result<Vec<Record>, MealDbError> {
    Ok(serde_json::from_value(value)?)
}

/// Takes the first record of an expected field, failing when the list
/// turns out to be empty.
pub(crate) fn extract_first(value: Value) -> Result<Record, MealDbError> {
    extract_records(value)?
        .into_iter()
        .next()
        .ok_or(MealDbError::NoResults)
}

/// Projects the category name out of every row, keeping server order.
pub(crate) fn extract_category_names(value: Value) -> Result<Vec<String>, MealDbError> {
    let rows: Vec<CategoryName> = serde_json::from_value(value)?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}

/// Projects the area name out of every row, keeping server order.
pub(crate) fn extract_area_names(value: Value) -> Result<Vec<String>, MealDbError> {
    let rows: Vec<AreaName> = serde_json::from_value(value)?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}
