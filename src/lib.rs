//! Minimal client for OpenAI-compatible image generation.
//!
//! ```no_run
//! use genimage::{ImageClient, ImageConfig};
//!
//! # async fn run() -> genimage::Result<()> {
//! let client = ImageClient::new(ImageConfig::from_env())?;
//! let url = client.generate("a lighthouse at dusk", "dall-e-3", "1024x1024").await?;
//! println!("{}", url);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;

pub use client::{ImageClient, ImageProvider, OpenAiImageProvider};
pub use config::ImageConfig;
pub use error::{ImageError, Result};
pub use models::*;
