use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_MIN_READABLE_CONTRAST;

/// Generate editor color themes from terminal palette files.
#[derive(Parser, Debug)]
#[command(name = "ide-themer", version, about)]
pub struct Args {
    /// Directory holding one subdirectory per theme
    #[arg(long, global = true, env = "IDE_THEMER_THEMES_DIR")]
    pub themes_dir: Option<PathBuf>,

    /// Background/foreground ratio below which low contrast is reported
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_READABLE_CONTRAST)]
    pub min_contrast: f64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate the editor theme for one theme directory
    Generate {
        /// Theme name (subdirectory of the themes directory)
        theme: String,

        /// Print the document to stdout instead of writing it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,

        /// Write the document to this file instead of the theme directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a colored terminal preview of the palette
        #[arg(long)]
        preview: bool,
    },

    /// Generate editor themes for every theme directory
    GenerateAll,

    /// Show which themes already have a generated document
    Status,

    /// List available themes
    List,
}
