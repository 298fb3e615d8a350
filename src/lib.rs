//! `weather-mcp-server` - wttr.in weather lookups exposed as an MCP tool
//!
//! The library provides the lookup itself ([`WeatherLookup`]), the MCP
//! server wrapping it ([`WeatherServer`]) and an optional HTTP surface.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;
pub mod tools;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use crate::config::{ServerConfig, WeatherConfig};
pub use error::WeatherServerError;
pub use models::{LocationQuery, WeatherPayload};
pub use server::WeatherServer;
pub use weather::WeatherLookup;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherServerError>;
