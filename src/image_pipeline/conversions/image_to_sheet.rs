use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    color::{ColorIndex, ColorTable},
    common::error::{PipelineError, Result},
    conversions::timing::PipelineTimings,
    grid::{ColumnLabelTable, GridDimensions, GridSampler},
    sheet::{CellAddress, CellRenderer, SheetConfig, SheetWriter, XlsxSheetWriter},
    source::{ImageSourceReader, SourceImage, StandardImageReader},
};

/// Cell counts above this get a warning; every cell is one unit of work.
const LARGE_FAN_OUT: usize = 1_000_000;

/// Locks the shared sheet writer on behalf of the worker writing `address`.
pub(crate) fn lock_writer<'a, T>(
    sink: &'a Mutex<T>,
    address: &CellAddress,
) -> Result<MutexGuard<'a, T>> {
    sink.lock().map_err(|_| PipelineError::CellWriteError {
        cell: address.to_string(),
        message: "sheet writer lock poisoned".to_string(),
    })
}

/// Outcome of one conversion run.
#[derive(Debug, Clone)]
pub struct SheetSummary {
    pub grid: GridDimensions,
    pub colors: ColorTable,
    pub timings: PipelineTimings,
}

pub struct ImageToSheetPipeline<R: ImageSourceReader, W: SheetWriter> {
    reader: R,
    writer: W,
    config: SheetConfig,
}

impl ImageToSheetPipeline<StandardImageReader, XlsxSheetWriter> {
    pub fn new(config: SheetConfig) -> Result<Self> {
        config.validate()?;
        let writer = XlsxSheetWriter::new(&config.sheet_name)?;
        Ok(Self {
            reader: StandardImageReader,
            writer,
            config,
        })
    }
}

impl<R: ImageSourceReader, W: SheetWriter + Send> ImageToSheetPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: SheetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Samples `image` and writes every grid cell plus the column widths into
    /// the sheet writer. Nothing is saved.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn render_image(&mut self, image: &SourceImage) -> Result<(GridDimensions, ColorTable)> {
        self.validate_dimensions(image.width(), image.height())?;

        let grid = GridDimensions::from_image(image.width(), image.height(), self.config.pixel_size);
        info!(
            columns = grid.columns,
            rows = grid.rows,
            pixel_size = self.config.pixel_size,
            "Computed grid"
        );
        if grid.cell_count() > LARGE_FAN_OUT {
            warn!(
                cells = grid.cell_count(),
                "Large grid; consider a bigger pixel size or a bounded thread count"
            );
        }

        let labels = ColumnLabelTable::new(grid.columns.max(self.config.min_label_columns));
        let index = ColorIndex::new();

        {
            let _span = tracing::info_span!("render_cells", cells = grid.cell_count()).entered();
            self.render_cells(image, grid, &labels, &index)?;
        }

        if grid.columns > 0 {
            let _span = tracing::info_span!("set_column_width").entered();
            self.writer
                .set_column_width(1, grid.columns, self.config.column_width())?;
        }

        debug!(colors = index.color_count(), "Rendered all cells");
        Ok((grid, index.table()))
    }

    /// One unit of work per grid cell, joined before returning. The sheet
    /// writer lock is held across colour resolution and the cell write, so
    /// all document mutation is serialised while sampling runs in parallel.
    fn render_cells(
        &mut self,
        image: &SourceImage,
        grid: GridDimensions,
        labels: &ColumnLabelTable,
        index: &ColorIndex,
    ) -> Result<()> {
        let sampler = GridSampler::new(self.config.pixel_size);
        let renderer = CellRenderer::new(labels, self.config.cell_height);
        let sink = Mutex::new(&mut self.writer);

        let fan_out = || {
            (0..grid.cell_count()).into_par_iter().try_for_each(|cell| {
                let coord = grid.coordinate(cell);
                let color = sampler.sample(image, coord).key();
                let address = renderer.address(coord)?;
                let mut writer = lock_writer(&sink, &address)?;
                let id = index.resolve(&color);
                renderer.render_at(&mut **writer, &address, id, &color)
            })
        };

        match self.config.threads {
            Some(threads) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| PipelineError::ThreadPoolError(e.to_string()))?;
                debug!(threads, "Rendering on dedicated pool");
                pool.install(fan_out)
            }
            None => fan_out(),
        }
    }

    #[instrument(skip(self, input_data, output_path), fields(input_size = input_data.len()))]
    pub fn convert(&mut self, input_data: &[u8], output_path: &Path) -> Result<SheetSummary> {
        info!("Starting image to sheet conversion");
        let mut timings = PipelineTimings::new();

        let image = timings.time("decode_image", || {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)
        })?;

        let (grid, colors) = timings.time("render_sheet", || self.render_image(&image))?;

        timings.time("save_sheet", || {
            let _span = tracing::info_span!("save_sheet", output = %output_path.display()).entered();
            self.writer.save(output_path)
        })?;

        info!(
            columns = grid.columns,
            rows = grid.rows,
            colors = colors.len(),
            "Conversion complete"
        );
        Ok(SheetSummary {
            grid,
            colors,
            timings,
        })
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        input_path: P,
        output_path: Q,
    ) -> Result<SheetSummary> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let mut timings = PipelineTimings::new();
        let input_data = timings.time("read_input_file", || {
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let summary = self.convert(&input_data, output_path)?;
        timings.extend(&summary.timings);

        Ok(SheetSummary { timings, ..summary })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}
