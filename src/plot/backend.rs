//! Output backends for rendered figures.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::DynamicImage;

use super::Figure;

/// Default terminal width in character cells
const DEFAULT_COLUMNS: u32 = 80;

/// Something that can display a figure.
pub trait Backend {
    fn show(&mut self, figure: &Figure) -> crate::Result<()>;
}

/// Writes figures to an image file. The format follows the file extension.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn show(&mut self, figure: &Figure) -> crate::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Not every encoder takes RGBA (JPEG), and the canvas is opaque anyway
        let rgb = DynamicImage::ImageRgba8(figure.canvas().clone()).to_rgb8();
        rgb.save(&self.path)?;

        tracing::info!("Saved figure to {:?}", self.path);
        Ok(())
    }
}

/// Prints figures as 24-bit ANSI colour using upper half blocks.
///
/// Each character cell carries two vertical pixels: the foreground colour is
/// the top pixel and the background colour is the bottom one.
pub struct TerminalBackend<W: Write> {
    out: W,
    columns: u32,
}

impl TerminalBackend<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBackend<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            columns: DEFAULT_COLUMNS,
        }
    }

    /// Set the output width in character cells
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Backend for TerminalBackend<W> {
    fn show(&mut self, figure: &Figure) -> crate::Result<()> {
        let cols = self.columns.min(figure.width()).max(1);
        let rows = (figure.height() as u64 * cols as u64 / figure.width().max(1) as u64) as u32;
        let rows = rows.max(2);
        let rows = rows + rows % 2;

        let scaled = imageops::resize(figure.canvas(), cols, rows, FilterType::Triangle);

        for y in (0..rows).step_by(2) {
            let mut line = String::with_capacity(cols as usize * 40);
            for x in 0..cols {
                let top = scaled.get_pixel(x, y);
                let bottom = scaled.get_pixel(x, y + 1);
                // Writing into a String cannot fail
                let _ = write!(
                    line,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                    top[0], top[1], top[2], bottom[0], bottom[1], bottom[2]
                );
            }
            line.push_str("\x1b[0m");
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;

        tracing::debug!("Printed figure as {}x{} cells", cols, rows / 2);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FigureConfig;
    use crate::plot::render;
    use image::{Rgb, RgbImage};

    fn figure() -> Figure {
        let image = RgbImage::from_pixel(64, 48, Rgb([0, 128, 255]));
        render(&image, &FigureConfig::default())
    }

    #[test]
    fn test_terminal_line_count() {
        let mut backend = TerminalBackend::new(Vec::new()).with_columns(40);
        backend.show(&figure()).unwrap();

        let text = String::from_utf8(backend.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|l| l.ends_with("\x1b[0m")));
        assert_eq!(lines[0].matches('\u{2580}').count(), 40);
    }

    #[test]
    fn test_terminal_colours() {
        let mut backend = TerminalBackend::new(Vec::new()).with_columns(8);
        backend.show(&figure()).unwrap();

        let text = String::from_utf8(backend.into_inner()).unwrap();
        assert!(text.contains("\x1b[38;2;0;128;255m"));
    }

    #[test]
    fn test_file_backend_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("figure.png");

        let mut backend = FileBackend::new(&path);
        backend.show(&figure()).unwrap();

        let saved = image::open(backend.path()).unwrap();
        assert_eq!((saved.width(), saved.height()), (640, 480));
    }

    #[test]
    fn test_file_backend_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("figure.nope"));

        let err = backend.show(&figure()).unwrap_err();
        assert!(matches!(err, crate::ImgUtilsError::Image(_)));
    }
}
