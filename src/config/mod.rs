//! Configuration for figure rendering.

mod figure_config;

pub use figure_config::FigureConfig;
