//! Command-line interface
//!
//! Long flags are accepted with either one or two leading dashes, so both
//! `-path in.png -pix 8` and `--path in.png --pix 8` parse the same way.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::image_pipeline::SheetConfig;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "pixel_sheet")]
#[command(about = "Render an image as a grid of coloured, numbered spreadsheet cells")]
pub struct Cli {
    /// Input image file (PNG, JPEG, ...)
    #[arg(long)]
    pub path: PathBuf,

    /// Print the colour:id table to stdout after saving
    #[arg(long)]
    pub print: bool,

    /// Grid cell edge length in source pixels
    #[arg(long, default_value_t = 16)]
    pub pix: u32,

    /// Output row height; also drives the column width
    #[arg(long = "cellHeight", default_value_t = 20.0)]
    pub cell_height: f64,

    /// Output workbook path
    #[arg(long, default_value = "./result.xlsx")]
    pub output: PathBuf,

    /// Worksheet name
    #[arg(long, default_value = "Sheet1")]
    pub sheet: String,

    /// Worker threads for cell rendering (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Print a per-stage timing summary after saving
    #[arg(long)]
    pub timings: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn sheet_config(&self) -> SheetConfig {
        SheetConfig::builder()
            .pixel_size(self.pix)
            .cell_height(self.cell_height)
            .sheet_name(self.sheet.clone())
            .threads(self.threads)
            .build()
    }
}

/// Rewrites `-name` and `-name=value` into `--name` forms when `name` is one
/// of our long flags. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let long_flags: Vec<&str> = command.get_arguments().filter_map(|arg| arg.get_long()).collect();

    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_separator = true;
                return arg;
            }
            let Some(rest) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if long_flags.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}
