//! Image display.
//!
//! An image is first rendered onto a [`Figure`] canvas, then handed to a
//! [`Backend`] which puts it somewhere visible (terminal, file).

mod backend;
mod figure;

pub use backend::{Backend, FileBackend, TerminalBackend};
pub use figure::{render, Figure};

use image::RgbImage;

use crate::config::FigureConfig;

/// Show an image on the default figure.
///
/// Axes are always hidden; use [`plot_img_with`] to draw the frame.
pub fn plot_img<B: Backend + ?Sized>(image: &RgbImage, backend: &mut B) -> crate::Result<()> {
    plot_img_with(image, &FigureConfig::default(), backend)
}

/// Show an image using a custom figure layout.
pub fn plot_img_with<B: Backend + ?Sized>(
    image: &RgbImage,
    config: &FigureConfig,
    backend: &mut B,
) -> crate::Result<()> {
    config.validate()?;
    let figure = render(image, config);
    backend.show(&figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    /// Keeps the last figure it was asked to show
    #[derive(Default)]
    struct Capture {
        shown: Option<Figure>,
    }

    impl Backend for Capture {
        fn show(&mut self, figure: &Figure) -> crate::Result<()> {
            self.shown = Some(figure.clone());
            Ok(())
        }
    }

    #[test]
    fn test_plot_img_hides_axes() {
        let image = RgbImage::from_pixel(4, 3, Rgb([9, 9, 9]));
        let mut capture = Capture::default();
        plot_img(&image, &mut capture).unwrap();

        let figure = capture.shown.unwrap();
        let (x, y, _, _) = figure.image_area();
        assert_eq!(figure.canvas().get_pixel(x, y), &Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn test_plot_img_with_invalid_config() {
        let image = RgbImage::new(4, 3);
        let config = FigureConfig::default().with_size(0, 10);
        let mut capture = Capture::default();

        assert!(plot_img_with(&image, &config, &mut capture).is_err());
        assert!(capture.shown.is_none());
    }

    #[test]
    fn test_plot_img_dyn_backend() {
        let image = RgbImage::new(4, 3);
        let mut backend: Box<dyn Backend> = Box::new(Capture::default());
        plot_img(&image, backend.as_mut()).unwrap();
    }
}
