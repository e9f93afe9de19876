pub mod client;
pub mod config;

pub use client::ClientError;
pub use config::ConfigError;
