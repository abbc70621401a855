//! Raw field storage behind every API model.
//!
//! A model keeps the JSON object it was decoded from (or will be sent as) and
//! exposes typed accessors on top of it. A key that is absent and a key that
//! holds `null` are different states and both survive serialization.

use crate::utils::error::{Result, StraddleError};
use crate::utils::validation::Validate;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Absent,
    Null,
    Present,
}

/// Ordered key/value map of a model's JSON fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawFields(Map<String, Value>);

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn state(&self, key: &str) -> FieldState {
        match self.0.get(key) {
            None => FieldState::Absent,
            Some(Value::Null) => FieldState::Null,
            Some(_) => FieldState::Present,
        }
    }

    /// Decodes a field that must be present and non-null.
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        match self.0.get(key) {
            None | Some(Value::Null) => Err(StraddleError::MissingRequiredField {
                field: key.to_string(),
            }),
            Some(value) => decode(key, value),
        }
    }

    /// Decodes a field that may be absent or null; both read as `None`.
    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(key, value).map(Some),
        }
    }

    pub fn set<T: ToRaw>(&mut self, key: &str, value: T) {
        self.0.insert(key.to_string(), value.to_raw());
    }

    /// `None` drops the key, so the field is omitted on the wire.
    pub fn set_optional<T: ToRaw>(&mut self, key: &str, value: Option<T>) {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.0.shift_remove(key);
            }
        }
    }

    /// `None` stores an explicit `null`.
    pub fn set_nullable<T: ToRaw>(&mut self, key: &str, value: Option<T>) {
        match value {
            Some(value) => self.set(key, value),
            None => {
                self.0.insert(key.to_string(), Value::Null);
            }
        }
    }

    pub fn insert_value(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn validate_required<T: DeserializeOwned + Validate>(&self, key: &str) -> Result<()> {
        self.required::<T>(key)?.validate()
    }

    pub fn validate_present<T: DeserializeOwned + Validate>(&self, key: &str) -> Result<()> {
        match self.optional::<T>(key)? {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }

    /// Flattens the fields into query-string pairs. Nulls are skipped and
    /// arrays become one pair per element.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = query_text(item) {
                            pairs.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = query_text(other) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
        }
        pairs
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|source| StraddleError::InvalidFieldType {
        field: key.to_string(),
        source,
    })
}

fn query_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Infallible conversion of a typed value into its wire representation.
pub trait ToRaw {
    fn to_raw(self) -> Value;
}

impl ToRaw for String {
    fn to_raw(self) -> Value {
        Value::String(self)
    }
}

impl ToRaw for &str {
    fn to_raw(self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToRaw for bool {
    fn to_raw(self) -> Value {
        Value::Bool(self)
    }
}

impl ToRaw for i64 {
    fn to_raw(self) -> Value {
        Value::from(self)
    }
}

impl ToRaw for f64 {
    fn to_raw(self) -> Value {
        serde_json::Number::from_f64(self)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl ToRaw for Value {
    fn to_raw(self) -> Value {
        self
    }
}

impl ToRaw for DateTime<Utc> {
    fn to_raw(self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl ToRaw for NaiveDate {
    fn to_raw(self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl<T: ToRaw> ToRaw for Vec<T> {
    fn to_raw(self) -> Value {
        Value::Array(self.into_iter().map(ToRaw::to_raw).collect())
    }
}

impl<T: ToRaw> ToRaw for BTreeMap<String, T> {
    fn to_raw(self) -> Value {
        Value::Object(self.into_iter().map(|(k, v)| (k, v.to_raw())).collect())
    }
}

/// A typed view over [`RawFields`].
pub trait RawModel: Sized {
    /// Keys this model declares accessors for.
    const FIELDS: &'static [&'static str];

    fn raw(&self) -> &RawFields;

    fn raw_mut(&mut self) -> &mut RawFields;

    fn from_raw(raw: RawFields) -> Self;

    fn field_state(&self, key: &str) -> FieldState {
        self.raw().state(key)
    }

    /// Fields the server sent that this model has no accessor for.
    fn additional_properties(&self) -> Vec<(&str, &Value)> {
        self.raw()
            .iter()
            .filter(|(key, _)| !Self::FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    fn from_json(json: &str) -> Result<Self> {
        let raw: RawFields = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self.raw())?)
    }

    fn to_value(&self) -> Value {
        Value::Object(self.raw().as_map().clone())
    }
}
