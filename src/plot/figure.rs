//! Rendering an image onto a figure canvas.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbImage, RgbaImage};

use crate::config::FigureConfig;

/// A rendered figure ready to hand to a backend.
#[derive(Debug, Clone)]
pub struct Figure {
    canvas: RgbaImage,
    /// (x, y, width, height) of the image inside the canvas
    image_area: (u32, u32, u32, u32),
}

impl Figure {
    /// The rendered pixels
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Placement of the image as (x, y, width, height)
    pub fn image_area(&self) -> (u32, u32, u32, u32) {
        self.image_area
    }
}

/// Draw `image` onto a canvas described by `config`.
///
/// The image keeps its aspect ratio and is centred. A frame is drawn around
/// the image area only when `config.show_axes` is set.
pub fn render(image: &RgbImage, config: &FigureConfig) -> Figure {
    let (fig_w, fig_h) = (config.width.max(1), config.height.max(1));
    let [r, g, b] = config.background;
    let mut canvas = RgbaImage::from_pixel(fig_w, fig_h, Rgba([r, g, b, 255]));

    if image.width() == 0 || image.height() == 0 {
        return Figure {
            canvas,
            image_area: (0, 0, 0, 0),
        };
    }

    let scale = f64::min(
        fig_w as f64 / image.width() as f64,
        fig_h as f64 / image.height() as f64,
    );
    let draw_w = ((image.width() as f64 * scale).round() as u32).clamp(1, fig_w);
    let draw_h = ((image.height() as f64 * scale).round() as u32).clamp(1, fig_h);

    // Nearest keeps pixel blocks crisp when enlarging small images
    let filter = if scale >= 1.0 {
        FilterType::Nearest
    } else {
        FilterType::Triangle
    };
    let resized = imageops::resize(image, draw_w, draw_h, filter);
    let resized = DynamicImage::ImageRgb8(resized).to_rgba8();

    let x0 = (fig_w - draw_w) / 2;
    let y0 = (fig_h - draw_h) / 2;
    imageops::overlay(&mut canvas, &resized, x0 as i64, y0 as i64);

    let image_area = (x0, y0, draw_w, draw_h);
    if config.show_axes {
        draw_frame(&mut canvas, image_area, config.axis_color);
    }

    tracing::debug!(
        "Rendered {}x{} image into {}x{} figure at ({}, {})",
        image.width(),
        image.height(),
        fig_w,
        fig_h,
        x0,
        y0
    );

    Figure { canvas, image_area }
}

fn draw_frame(canvas: &mut RgbaImage, (x0, y0, w, h): (u32, u32, u32, u32), color: [u8; 3]) {
    let [r, g, b] = color;
    let px = Rgba([r, g, b, 255]);
    let (x1, y1) = (x0 + w - 1, y0 + h - 1);

    for x in x0..=x1 {
        canvas.put_pixel(x, y0, px);
        canvas.put_pixel(x, y1, px);
    }
    for y in y0..=y1 {
        canvas.put_pixel(x0, y, px);
        canvas.put_pixel(x1, y, px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    #[test]
    fn test_render_preserves_aspect() {
        let image = RgbImage::from_pixel(200, 100, RED);
        let figure = render(&image, &FigureConfig::default());

        assert_eq!((figure.width(), figure.height()), (640, 480));
        assert_eq!(figure.image_area(), (0, 80, 640, 320));
        assert_eq!(figure.canvas().get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(figure.canvas().get_pixel(320, 240), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_render_axes_hidden() {
        let image = RgbImage::from_pixel(200, 100, RED);
        let figure = render(&image, &FigureConfig::default());

        // Image edge is plain image colour, no spine
        assert_eq!(figure.canvas().get_pixel(0, 80), &Rgba([255, 0, 0, 255]));
        assert_eq!(figure.canvas().get_pixel(639, 399), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_render_axes_shown() {
        let image = RgbImage::from_pixel(200, 100, RED);
        let config = FigureConfig::default().with_axes(true);
        let figure = render(&image, &config);

        assert_eq!(figure.canvas().get_pixel(0, 80), &Rgba([0, 0, 0, 255]));
        assert_eq!(figure.canvas().get_pixel(639, 399), &Rgba([0, 0, 0, 255]));
        assert_eq!(figure.canvas().get_pixel(320, 240), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_render_tall_image_centred() {
        let image = RgbImage::from_pixel(10, 40, RED);
        let figure = render(&image, &FigureConfig::default().with_size(100, 100));

        assert_eq!(figure.image_area(), (37, 0, 25, 100));
    }
}
