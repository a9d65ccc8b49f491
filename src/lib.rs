//! # rs-imgutils
//!
//! Small helpers for vision experiments: pick a compute device, fetch an
//! image over HTTP, and show it without axes.
//!
//! ## Example
//!
//! ```ignore
//! use rs_imgutils::{download_image, get_device, plot_img, TerminalBackend};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     println!("device: {}", get_device());
//!
//!     let image = download_image("https://example.com/cat.png").await?;
//!     plot_img(&image, &mut TerminalBackend::stdout())?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod plot;
pub mod utils;

// Re-exports for convenience
pub use config::FigureConfig;
pub use plot::{plot_img, plot_img_with, render, Backend, Figure, FileBackend, TerminalBackend};
pub use utils::{decode_image, download_image, get_device, select_device, DeviceKind};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum ImgUtilsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch {url}: HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Device error: {0}")]
    Device(#[from] candle_core::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImgUtilsError>;
