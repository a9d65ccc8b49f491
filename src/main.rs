//! imgutils CLI - pick a device, fetch images and look at them.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use rs_imgutils::{
    download_image, get_device, plot::plot_img_with, Backend, FigureConfig, FileBackend,
    TerminalBackend,
};

#[derive(Parser)]
#[command(name = "imgutils")]
#[command(author, version, about = "Device selection and image display helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the best available compute device
    Device {
        /// Also open the device to make sure it works
        #[arg(long)]
        check: bool,

        /// GPU index used with --check
        #[arg(long, default_value = "0")]
        ordinal: usize,
    },

    /// Download an image and display it without axes
    Show {
        /// Image URL
        #[arg(short, long)]
        url: String,

        /// Write the figure to this file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Figure layout JSON file
        #[arg(long, env = "IMGUTILS_FIGURE_CONFIG")]
        config: Option<PathBuf>,

        /// Figure width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Figure height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Draw a frame around the image
        #[arg(long)]
        axes: bool,

        /// Terminal width in character cells
        #[arg(long, default_value = "80")]
        columns: u32,
    },

    /// Download an image and save it as RGB
    Fetch {
        /// Image URL
        #[arg(short, long)]
        url: String,

        /// Destination file (format from extension)
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rs_imgutils=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Device { check, ordinal } => {
            let device = get_device();
            println!("{}", device);

            if check {
                let opened = device.to_candle(ordinal)?;
                println!("Opened: {:?}", opened);
            }
        }

        Commands::Show {
            url,
            output,
            config,
            width,
            height,
            axes,
            columns,
        } => {
            let base = match config {
                Some(path) => FigureConfig::from_file(path)?,
                None => FigureConfig::default(),
            };
            let figure = merge_figure_flags(base, width, height, axes);

            let image = fetch_with_spinner(&url).await?;

            let mut backend: Box<dyn Backend> = match output {
                Some(path) => Box::new(FileBackend::new(path)),
                None => Box::new(TerminalBackend::stdout().with_columns(columns)),
            };
            plot_img_with(&image, &figure, backend.as_mut())?;
        }

        Commands::Fetch { url, output } => {
            let image = fetch_with_spinner(&url).await?;
            image.save(&output)?;
            println!(
                "Saved {}x{} image to {}",
                image.width(),
                image.height(),
                output.display()
            );
        }
    }

    Ok(())
}

/// Apply command-line overrides on top of a loaded figure config
fn merge_figure_flags(
    config: FigureConfig,
    width: Option<u32>,
    height: Option<u32>,
    axes: bool,
) -> FigureConfig {
    let (w, h) = (width.unwrap_or(config.width), height.unwrap_or(config.height));
    let config = config.with_size(w, h);
    if axes {
        config.with_axes(true)
    } else {
        config
    }
}

async fn fetch_with_spinner(url: &str) -> anyhow::Result<image::RgbImage> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Downloading {}", url));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = download_image(url).await;
    pb.finish_and_clear();

    Ok(result?)
}
