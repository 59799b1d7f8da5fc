//! Client for the Open Spherical Camera (OSC) HTTP API.

pub mod app_config;
mod extensions;
pub mod osc;
