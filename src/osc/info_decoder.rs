use crate::extensions::json_value_ext::{JsonValueExt, mismatch};
use crate::osc::info::{Endpoints, Info, Version};
use serde_json::{Map, Value};
use std::io::Read;
use thiserror::Error;
use tracing::trace;

const VENDOR_PREFIX: char = '_';

/// Decodes the body of an `/osc/info` response.
///
/// The body is read into a generic JSON object rather than a fixed schema because cameras may add
/// any number of vendor specific fields. Those are the top-level keys prefixed with an underscore,
/// and they end up in [`Info::vendor`] with the prefix stripped. Other unknown keys are dropped.
///
/// A recognized key holding a value of the wrong JSON type aborts decoding; nothing is coerced.
pub fn parse_info(reader: impl Read) -> Result<Info, DecodeError> {
    let body: Map<String, Value> = serde_json::from_reader(reader)?;

    let mut info = Info::default();
    let mut versions: Option<Vec<Version>> = None;

    for (key, value) in body {
        if let Some(vendor_key) = key.strip_prefix(VENDOR_PREFIX) {
            trace!(key = %vendor_key, "Storing vendor field");
            info.vendor.insert(vendor_key.to_owned(), value);
            continue;
        }

        match key.as_str() {
            "manufacturer" => info.manufacturer = value.into_string(&key)?,
            "model" => info.model = value.into_string(&key)?,
            "serialNumber" => info.serial = value.into_string(&key)?,
            "firmwareVersion" => info.firmware = value.into_string(&key)?,
            "supportUrl" => info.support = value.into_string(&key)?,
            "gps" => info.gps = value.as_boolean(&key)?,
            "gyro" => info.gyro = value.as_boolean(&key)?,
            "uptime" => info.uptime = value.as_truncated(&key)?,
            "api" => {
                info.api = value
                    .into_array(&key)?
                    .into_iter()
                    .map(|api| api.into_string(&key))
                    .collect::<Result<Vec<_>, _>>()?
            }
            "apiLevel" => versions = Some(parse_versions(&key, value)?),
            "endpoints" => info.endpoints = parse_endpoints(value.into_object(&key)?)?,
            _ => trace!(key = %key, "Ignoring unknown field"),
        }
    }

    info.versions = versions.unwrap_or_else(|| vec![Version::V1]);
    Ok(info)
}

// Only the integer tags of a known Version are accepted, anything else is a type mismatch.
fn parse_versions(key: &str, value: Value) -> Result<Vec<Version>, DecodeError> {
    value
        .into_array(key)?
        .iter()
        .map(|level| level.as_u64().and_then(Version::from_tag).ok_or_else(|| mismatch(key, "an API level", level)))
        .collect()
}

fn parse_endpoints(endpoints: Map<String, Value>) -> Result<Endpoints, DecodeError> {
    let mut result = Endpoints::default();

    if let Some(value) = endpoints.get("httpPort") {
        result.http.server = value.as_truncated("endpoints.httpPort")?;
    }
    if let Some(value) = endpoints.get("httpUpdatesPort") {
        result.http.updates = value.as_truncated("endpoints.httpUpdatesPort")?;
    }
    if let Some(value) = endpoints.get("httpsPort") {
        result.https.server = value.as_truncated("endpoints.httpsPort")?;
    }
    if let Some(value) = endpoints.get("httpsUpdatesPort") {
        result.https.updates = value.as_truncated("endpoints.httpsUpdatesPort")?;
    }

    Ok(result)
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid info JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected '{key}' to be {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
