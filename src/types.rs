//! Core types for number-lookup

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Known payload keys and their display labels, in display order
pub const FIELD_MAPPING: [(&str, &str); 7] = [
    ("name", "TARGET IDENTITY"),
    ("fname", "FATHERS IDENTITY"),
    ("mobile", "PRIMARY CONTACT"),
    ("alt", "SECONDARY CONTACT"),
    ("id", "ADHAR ID"),
    ("address", "GEOGRAPHIC LOCATION"),
    ("circle", "SERVICE ZONE"),
];

/// Payload key whose value is split into one line per segment
pub const ADDRESS_KEY: &str = "address";

/// Separator between address segments
pub const ADDRESS_SEPARATOR: &str = ", ";

/// Whether `key` appears in [`FIELD_MAPPING`]
#[must_use]
pub fn is_known_field(key: &str) -> bool {
    FIELD_MAPPING.iter().any(|(known, _)| *known == key)
}

/// A validated target number: 10 to 15 ASCII digits
///
/// Only [`crate::validator::validate`] constructs one, so holding a
/// `TargetNumber` proves the input passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TargetNumber(String);

impl TargetNumber {
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    /// The digit string as entered (trimmed)
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TargetNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TargetNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON object returned by the lookup service
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Wrap an already-parsed JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value under `key` only when it is present and truthy
    pub fn truthy(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| is_truthy(v))
    }

    /// All entries in payload order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// True when there is nothing worth showing: no keys, or only falsy values
    pub fn has_no_data(&self) -> bool {
        self.0.values().all(|v| !is_truthy(v))
    }

    /// Keys that are not in [`FIELD_MAPPING`], in payload order
    pub fn auxiliary(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().filter(|(k, _)| !is_known_field(k))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Outcome of one lookup
#[derive(Clone, Debug, PartialEq)]
pub enum LookupResult {
    /// The service answered 200 with a JSON object
    Success(Payload),
    /// Anything else, described for the user
    Failure(String),
}

impl LookupResult {
    /// Build a failure from any displayable reason
    pub fn failure(reason: impl Into<String>) -> Self {
        LookupResult::Failure(reason.into())
    }

    /// Whether the lookup produced a payload
    pub fn is_success(&self) -> bool {
        matches!(self, LookupResult::Success(_))
    }
}

/// Whether a JSON value counts as present for display
///
/// Falsy values are `null`, `""`, `false`, `[]` and `{}`. Numeric zero is a
/// legitimate value and stays truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Number(_) => true,
    }
}

/// Human-readable text for a JSON value
///
/// Strings are shown without quotes and booleans as `True`/`False`; everything
/// else uses its compact JSON form.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Label for an auxiliary key: uppercase, underscores become spaces
#[must_use]
pub fn auxiliary_label(key: &str) -> String {
    key.to_uppercase().replace('_', " ")
}
