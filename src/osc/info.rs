use serde::Serialize;
use serde_json::{Map, Value};

/// An API level supported by the camera, tagged with the integer the device reports in `apiLevel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Version {
    V1 = 1,
    V2 = 2,
}

impl Version {
    pub fn from_tag(tag: u64) -> Option<Version> {
        match tag {
            1 => Some(Version::V1),
            2 => Some(Version::V2),
            _ => None,
        }
    }

    pub fn tag(self) -> u64 {
        self as u64
    }
}

// API: https://developers.google.com/streetview/open-spherical-camera/reference/info
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Info {
    pub manufacturer: String,
    pub model: String,
    pub serial: String,
    pub firmware: String,
    /// URL of the camera's support webpage.
    pub support: String,
    pub gps: bool,
    pub gyro: bool,
    /// Seconds since the camera booted.
    pub uptime: i64,
    /// Supported API paths, in the order the camera lists them.
    pub api: Vec<String>,
    pub endpoints: Endpoints,
    pub versions: Vec<Version>,
    /// Underscore-prefixed fields with the prefix stripped.
    pub vendor: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Endpoints {
    pub http: Ports,
    pub https: Ports,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Ports {
    pub server: i64,
    pub updates: i64,
}
