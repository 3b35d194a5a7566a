use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::scenes::SceneKind;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lux")]
#[command(about = "Render Lux demo scenes with a recursive ray tracer")]
pub struct Args {
    /// Demo scene to render
    #[arg(short, long, value_enum, default_value = "phong")]
    pub scene: SceneKind,

    /// Render settings as JSON; the flags below override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Maximum recursion depth for reflections
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// OBJ file added to the scene; required by the `mesh` scene
    #[arg(short, long)]
    pub mesh: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "lux.png")]
    pub output: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Print the available scenes and exit
    #[arg(long)]
    pub list: bool,
}
