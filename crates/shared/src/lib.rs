//! Shared errors and configuration for Convertly.
//!
//! This crate provides common pieces used across the other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ConverterConfig, ServerConfig};
pub use error::{AppError, AppResult};
