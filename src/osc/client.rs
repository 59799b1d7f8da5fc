use crate::app_config::CameraSettings;
use crate::osc::info::Info;
use crate::osc::info_decoder::{DecodeError, parse_info};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, instrument};

const DEFAULT_SCHEME: &str = "http://";
const DEFAULT_PORT: u16 = 80;

/// A camera reachable over the OSC HTTP API.
#[derive(Debug, Clone)]
pub struct Camera {
    uri: String,
    client: Client,
}

impl Camera {
    /// Creates a camera for `host`, prefixing `http://` if no scheme is given. A `port` outside
    /// 1..=65535 falls back to 80.
    pub fn new(host: &str, port: i64) -> Result<Self, CameraError> {
        if host.is_empty() {
            return Err(CameraError::NoHost);
        }

        let host = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_owned()
        } else {
            format!("{}{}", DEFAULT_SCHEME, host)
        };

        let port = u16::try_from(port).ok().filter(|&port| port != 0).unwrap_or(DEFAULT_PORT);
        let uri = format!("{}:{}", host, port);
        debug!(uri = %uri, "Created camera");

        Ok(Camera { uri, client: Client::new() })
    }

    pub fn from_settings(settings: &CameraSettings) -> Result<Self, CameraError> {
        Camera::new(settings.host(), settings.port())
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Fetches `/osc/info`. Transport failures and non-success HTTP statuses are returned as
    /// [`CameraError::Request`] without decoding the body.
    #[instrument(skip(self), fields(uri = %self.uri))]
    pub async fn info(&self) -> Result<Info, CameraError> {
        info!("Retrieving camera info...");

        let response = self
            .client
            .get(format!("{}/osc/info", self.uri))
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let info = parse_info(&body[..])?;
        info!("Retrieving camera info... OK, {} {}", info.manufacturer, info.model);

        Ok(info)
    }
}

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("no host provided to connect to")]
    NoHost,
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
