use osc_camera::app_config::AppConfig;
use osc_camera::osc::Camera;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("📷 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let camera = Camera::from_settings(config.camera())?;
    info!("✅  Connecting to {}", camera.uri());

    let camera_info = camera.info().await?;
    println!("{}", serde_json::to_string_pretty(&camera_info)?);

    Ok(())
}
