#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::image_pipeline::color::ColorKey;
    use crate::image_pipeline::common::error::{PipelineError, Result};
    use crate::image_pipeline::grid::{ColumnLabelTable, GridCoordinate};
    use crate::image_pipeline::sheet::{
        BorderStyle, CellAddress, CellRenderer, CellStyle, SheetConfig, SheetWriter, XlsxSheetWriter,
    };

    #[derive(Default)]
    struct RecordingWriter {
        calls: Vec<String>,
    }

    impl SheetWriter for RecordingWriter {
        fn write_cell(&mut self, address: &CellAddress, value: u32, style: &CellStyle) -> Result<()> {
            self.calls.push(format!("cell {} {} {}", address, value, style.fill));
            Ok(())
        }

        fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
            self.calls.push(format!("row {} {}", row, height));
            Ok(())
        }

        fn set_column_width(&mut self, first: u32, last: u32, width: f64) -> Result<()> {
            self.calls.push(format!("cols {}-{} {}", first, last, width));
            Ok(())
        }

        fn save(&mut self, path: &Path) -> Result<()> {
            self.calls.push(format!("save {}", path.display()));
            Ok(())
        }
    }

    #[test]
    fn test_render_writes_cell_then_row_height() {
        let labels = ColumnLabelTable::new(30);
        let renderer = CellRenderer::new(&labels, 12.5);
        let mut writer = RecordingWriter::default();

        let address = renderer
            .render(&mut writer, GridCoordinate::new(26, 4), 3, &ColorKey::from_rgb(0, 128, 255))
            .unwrap();

        assert_eq!(address.as_str(), "AA5");
        assert_eq!((address.column, address.row), (27, 5));
        assert_eq!(writer.calls, vec!["cell AA5 3 #0080FF", "row 5 12.5"]);
    }

    #[test]
    fn test_render_outside_label_table() {
        let labels = ColumnLabelTable::new(2);
        let renderer = CellRenderer::new(&labels, 20.0);
        let mut writer = RecordingWriter::default();

        let result = renderer.render(&mut writer, GridCoordinate::new(2, 0), 1, &ColorKey::from_rgb(0, 0, 0));

        assert!(matches!(result, Err(PipelineError::ColumnOutOfRange(3))));
        assert!(writer.calls.is_empty());
    }

    #[test]
    fn test_swatch_style() {
        let style = CellStyle::swatch(ColorKey::from_rgb(1, 2, 3));
        assert_eq!(style.fill.as_str(), "#010203");
        assert_eq!(style.border, BorderStyle::Thin);
        assert_eq!(style.border_color.as_str(), "#000000");
    }

    #[test]
    fn test_config_builder() {
        let config = SheetConfig::builder()
            .pixel_size(8)
            .cell_height(30.0)
            .sheet_name("Mosaic")
            .threads(Some(2))
            .validate_dimensions(false)
            .min_label_columns(100)
            .build();

        assert_eq!(config.pixel_size, 8);
        assert_eq!(config.cell_height, 30.0);
        assert_eq!(config.sheet_name, "Mosaic");
        assert_eq!(config.threads, Some(2));
        assert!(!config.validate_dimensions);
        assert_eq!(config.min_label_columns, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_defaults() {
        let config = SheetConfig::default();
        assert_eq!(config.pixel_size, 16);
        assert_eq!(config.cell_height, 20.0);
        assert_eq!(config.sheet_name, "Sheet1");
        assert_eq!(config.threads, None);
        assert!((config.column_width() - 20.0 * 0.3528 / 2.2733).abs() < 1e-12);
    }

    #[test]
    fn test_config_validation() {
        let invalid = [
            SheetConfig::builder().pixel_size(0).build(),
            SheetConfig::builder().cell_height(0.0).build(),
            SheetConfig::builder().cell_height(-4.0).build(),
            SheetConfig::builder().cell_height(f64::NAN).build(),
            SheetConfig::builder().threads(Some(0)).build(),
            SheetConfig::builder().sheet_name("  ").build(),
        ];
        for config in invalid {
            assert!(
                matches!(config.validate(), Err(PipelineError::InvalidConfig(_))),
                "{:?} should be rejected",
                config
            );
        }
    }

    #[test]
    fn test_xlsx_writer_rejects_bad_sheet_name() {
        assert!(matches!(
            XlsxSheetWriter::new("bad[name]"),
            Err(PipelineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_xlsx_writer_reports_cell_beyond_sheet() {
        let mut writer = XlsxSheetWriter::new("Sheet1").unwrap();
        let address = CellAddress::new("XFE", 16_385, 1);

        let result = writer.write_cell(&address, 1, &CellStyle::swatch(ColorKey::from_rgb(0, 0, 0)));

        match result {
            Err(PipelineError::CellWriteError { cell, .. }) => assert_eq!(cell, "XFE1"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
