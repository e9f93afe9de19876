use crate::error::client::ClientError;

use models::ApiError;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const STAT_FIELD: &str = "stat";
pub const STAT_OK: &str = "ok";
pub const STAT_FAIL: &str = "fail";
pub const ERROR_FIELD: &str = "error";

/// Parse the `stat` envelope.
///
/// `ok` yields the top-level object; `fail` becomes a remote error carrying
/// the decoded `error` object. Anything else is a decode failure.
pub fn parse_envelope(body: &str) -> Result<Map<String, Value>, ClientError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(mut object) = value else {
        return Err(ClientError::decode("response is not a JSON object"));
    };

    match object.get(STAT_FIELD).and_then(Value::as_str) {
        Some(STAT_OK) => Ok(object),
        Some(STAT_FAIL) => {
            let error = match object.remove(ERROR_FIELD) {
                Some(raw @ Value::Object(_)) => serde_json::from_value::<ApiError>(raw)?,
                _ => ApiError::system("fail response without an error object"),
            };
            Err(ClientError::remote(error))
        }
        Some(other) => Err(ClientError::decode(format!("unknown stat '{other}'"))),
        None => Err(ClientError::decode("response has no stat field")),
    }
}

/// Decode a list response. The page type picks its own list and pagination
/// fields out of the top-level object.
pub fn decode_page<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    let object = parse_envelope(body)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Decode the single entity stored under the first of `field_names` present.
pub fn decode_entity<T: DeserializeOwned>(
    body: &str,
    field_names: &[&str],
) -> Result<T, ClientError> {
    let mut object = parse_envelope(body)?;
    let entity = field_names
        .iter()
        .find_map(|name| object.remove(*name).filter(|value| !value.is_null()))
        .ok_or_else(|| {
            ClientError::decode(format!(
                "ok response without any of [{}]",
                field_names.join(", ")
            ))
        })?;
    Ok(serde_json::from_value(entity)?)
}
