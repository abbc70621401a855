//! Open string enums.
//!
//! The API adds enum values over time. [`ApiEnum`] keeps whatever string the
//! server sent, maps it onto a known Rust variant when it can, and only
//! complains when [`Validate::validate`] is called.

use crate::domain::raw::ToRaw;
use crate::utils::error::{Result, StraddleError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// A closed set of wire values, usually declared with `known_enum!`.
pub trait KnownEnum: Copy + Eq + FromStr + AsRef<str> + IntoEnumIterator + 'static {
    const NAME: &'static str;
}

#[derive(Debug, Clone)]
pub enum ApiEnum<E: KnownEnum> {
    Known(E),
    Unknown(String),
}

impl<E: KnownEnum> ApiEnum<E> {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match E::from_str(&raw) {
            Ok(known) => ApiEnum::Known(known),
            Err(_) => ApiEnum::Unknown(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ApiEnum::Known(known) => known.as_ref(),
            ApiEnum::Unknown(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<E> {
        match self {
            ApiEnum::Known(known) => Some(*known),
            ApiEnum::Unknown(raw) => E::from_str(raw).ok(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.known().is_some()
    }

    pub fn known_values() -> Vec<String> {
        E::iter().map(|v| v.as_ref().to_string()).collect()
    }
}

impl<E: KnownEnum> From<E> for ApiEnum<E> {
    fn from(value: E) -> Self {
        ApiEnum::Known(value)
    }
}

impl<E: KnownEnum> PartialEq for ApiEnum<E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<E: KnownEnum> Eq for ApiEnum<E> {}

impl<E: KnownEnum> PartialEq<E> for ApiEnum<E> {
    fn eq(&self, other: &E) -> bool {
        self.as_str() == other.as_ref()
    }
}

impl<E: KnownEnum> Hash for ApiEnum<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<E: KnownEnum> fmt::Display for ApiEnum<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E: KnownEnum> Validate for ApiEnum<E> {
    fn validate(&self) -> Result<()> {
        if self.is_known() {
            Ok(())
        } else {
            Err(StraddleError::InvalidEnumValue {
                enum_name: E::NAME,
                value: self.as_str().to_string(),
            })
        }
    }
}

impl<E: KnownEnum> ToRaw for ApiEnum<E> {
    fn to_raw(self) -> serde_json::Value {
        serde_json::Value::String(self.as_str().to_string())
    }
}

impl<E: KnownEnum> Serialize for ApiEnum<E> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, E: KnownEnum> Deserialize<'de> for ApiEnum<E> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ApiEnum::from_raw(raw))
    }
}
