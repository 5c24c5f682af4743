use std::collections::BTreeMap;
use std::iter::FromIterator;

use pal_core::errors::{ErrorInfo, PalError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::radius::RadiusTable;

fn serde_error(code: &str, err: impl ToString) -> PalError {
    PalError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with recursively sorted keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, PalError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Restores a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, PalError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, PalError> {
    serde_yaml::from_slice(data).map_err(|err| {
        PalError::Config(ErrorInfo::new("yaml-parse", err.to_string()))
    })
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, PalError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml-write", err))
}

/// Encodes a radius table compactly with `bincode`.
pub fn radii_to_bytes(table: &RadiusTable) -> Result<Vec<u8>, PalError> {
    bincode::serialize(table).map_err(|err| serde_error("serialize-bytes", err))
}

/// Decodes a radius table written by [`radii_to_bytes`].
pub fn radii_from_bytes(bytes: &[u8]) -> Result<RadiusTable, PalError> {
    bincode::deserialize(bytes).map_err(|err| serde_error("deserialize-bytes", err))
}
