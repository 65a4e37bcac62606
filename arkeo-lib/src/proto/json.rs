//! Serde adapters for the chain's JSON conventions.
//!
//! The REST gateway renders 64-bit integers as decimal strings, `bytes` as
//! standard base64 and enums by their proto names. Inputs are accepted in
//! either the string or the numeric form.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber<T> {
    String(String),
    Number(T),
}

macro_rules! int_as_string {
    ($module:ident, $ty:ty) => {
        /// Serialize as a decimal string, accept string or number.
        pub mod $module {
            use super::*;

            pub fn serialize<S>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(value)
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<$ty, D::Error>
            where
                D: Deserializer<'de>,
            {
                match Option::<StringOrNumber<$ty>>::deserialize(deserializer)? {
                    None => Ok(0),
                    Some(StringOrNumber::Number(n)) => Ok(n),
                    Some(StringOrNumber::String(s)) if s.is_empty() => Ok(0),
                    Some(StringOrNumber::String(s)) => {
                        s.parse::<$ty>().map_err(serde::de::Error::custom)
                    }
                }
            }
        }
    };
}

int_as_string!(i64_string, i64);
int_as_string!(u64_string, u64);

/// Repeated `uint64` rendered as an array of decimal strings.
pub mod u64_string_vec {
    use super::*;
    use serde::ser::SerializeSeq;

    pub fn serialize<S>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<StringOrNumber<u64>>>::deserialize(deserializer)?;
        raw.unwrap_or_default()
            .into_iter()
            .map(|item| match item {
                StringOrNumber::Number(n) => Ok(n),
                StringOrNumber::String(s) => s.parse::<u64>().map_err(serde::de::Error::custom),
            })
            .collect()
    }
}

/// `bytes` fields as standard base64.
pub mod base64_bytes {
    use super::*;

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// Proto enums whose JSON form is the variant name.
pub trait ProtoEnum: Sized + Into<i32> + TryFrom<i32> {
    fn as_str_name(&self) -> &'static str;
    fn from_str_name(value: &str) -> Option<Self>;
}

/// Serializes a raw enum value by name, falling back to the number for
/// values this build does not know.
pub fn serialize_enum<E, S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
where
    E: ProtoEnum,
    S: Serializer,
{
    match E::try_from(*value) {
        Ok(known) => serializer.serialize_str(known.as_str_name()),
        Err(_) => serializer.serialize_i32(*value),
    }
}

pub fn deserialize_enum<'de, E, D>(deserializer: D) -> Result<i32, D::Error>
where
    E: ProtoEnum,
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber<i32>>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StringOrNumber::Number(n)) => Ok(n),
        Some(StringOrNumber::String(s)) => E::from_str_name(&s)
            .map(Into::into)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown enum value: {}", s))),
    }
}

/// Declares a `#[serde(with = ...)]` module for an `i32` field holding `$enum`.
macro_rules! enum_json {
    ($module:ident, $enum:ty) => {
        pub(crate) mod $module {
            use serde::{Deserializer, Serializer};

            pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
                $crate::proto::json::serialize_enum::<$enum, S>(value, serializer)
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
                $crate::proto::json::deserialize_enum::<$enum, D>(deserializer)
            }
        }
    };
}

pub(crate) use enum_json;
