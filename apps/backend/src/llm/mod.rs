//! Client for the external text-generation API.

pub mod client;
pub mod config;

pub use client::{LlmClient, LlmError};
pub use config::LlmConfig;
