//! Figure layout settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the canvas an image is drawn onto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Canvas fill colour (RGB)
    pub background: [u8; 3],

    /// Draw the frame around the image area
    pub show_axes: bool,

    /// Frame colour (RGB)
    pub axis_color: [u8; 3],
}

impl Default for FigureConfig {
    fn default() -> Self {
        // 6.4in x 4.8in at 100 dpi
        Self {
            width: 640,
            height: 480,
            background: [255, 255, 255],
            show_axes: false,
            axis_color: [0, 0, 0],
        }
    }
}

impl FigureConfig {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FigureConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject canvases with no area
    pub fn validate(&self) -> crate::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(crate::ImgUtilsError::Config(format!(
                "Figure size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Set canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set background colour
    pub fn with_background(mut self, rgb: [u8; 3]) -> Self {
        self.background = rgb;
        self
    }

    /// Show or hide the axes frame
    pub fn with_axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }
}
