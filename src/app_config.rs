use config::{Config, ConfigError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    camera: CameraSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    pub fn camera(&self) -> &CameraSettings {
        &self.camera
    }
}

#[derive(Debug, Deserialize)]
pub struct CameraSettings {
    host: String,
    port: i64,
}

impl CameraSettings {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> i64 {
        self.port
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                camera: CameraSettings {
                    host: "192.168.1.1".to_string(),
                    port: 80,
                },
            },
        }
    }

    pub fn camera_host(mut self, host: String) -> Self {
        self.config.camera.host = host;
        self
    }

    pub fn camera_port(mut self, port: i64) -> Self {
        self.config.camera.port = port;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn deserializes_the_camera_section() -> Result<(), AppConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str("[camera]\nhost = \"10.0.0.7\"\nport = 8080\n", FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        assert_eq!(config.camera().host(), "10.0.0.7");
        assert_eq!(config.camera().port(), 8080);

        Ok(())
    }

    #[test]
    fn fails_without_a_camera_section() {
        let result = Config::builder()
            .add_source(config::File::from_str("", FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>());

        assert!(result.is_err());
    }

    #[test]
    fn builder_overrides_the_defaults() {
        let config = AppConfigBuilder::new().camera_host("camera.local".to_string()).camera_port(8080).build();

        assert_eq!(config.camera().host(), "camera.local");
        assert_eq!(config.camera().port(), 8080);
    }
}
