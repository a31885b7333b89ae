use anyhow::{Context, Result};

use pixel_sheet::cli::Cli;
use pixel_sheet::image_pipeline::ImageToSheetPipeline;
use pixel_sheet::logger::{self, info};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logger::init();

    info!("Starting pixel_sheet...");

    let mut pipeline = ImageToSheetPipeline::new(cli.sheet_config()).context("Invalid configuration")?;

    let summary = pipeline
        .convert_file(&cli.path, &cli.output)
        .with_context(|| format!("Failed to convert {}", cli.path.display()))?;

    info!(
        "Wrote {} ({}x{} cells, {} colours)",
        cli.output.display(),
        summary.grid.columns,
        summary.grid.rows,
        summary.colors.len()
    );

    if cli.print {
        print!("{}", summary.colors);
    }
    if cli.timings {
        print!("{}", summary.timings);
    }

    Ok(())
}
