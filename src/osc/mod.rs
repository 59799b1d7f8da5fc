mod client;
mod info;
mod info_decoder;

pub use client::{Camera, CameraError};
pub use info::{Endpoints, Info, Ports, Version};
pub use info_decoder::{DecodeError, parse_info};
