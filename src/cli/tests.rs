#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::Path;

    use crate::cli::{normalize_args, Cli};

    #[test]
    fn test_single_dash_flags() {
        let cli = Cli::try_parse_args(["pixel_sheet", "-path", "x.png", "-pix", "4", "-cellHeight", "12", "-print"])
            .unwrap();

        assert_eq!(cli.path, Path::new("x.png"));
        assert_eq!(cli.pix, 4);
        assert_eq!(cli.cell_height, 12.0);
        assert!(cli.print);
        assert!(!cli.timings);
        assert_eq!(cli.output, Path::new("./result.xlsx"));
    }

    #[test]
    fn test_double_dash_flags() {
        let cli = Cli::try_parse_args([
            "pixel_sheet", "--path", "y.jpg", "--cellHeight=30", "--threads", "2", "--sheet", "Art",
        ])
        .unwrap();

        assert_eq!(cli.path, Path::new("y.jpg"));
        assert_eq!(cli.pix, 16);
        assert_eq!(cli.cell_height, 30.0);
        assert_eq!(cli.threads, Some(2));
        assert!(!cli.print);

        let config = cli.sheet_config();
        assert_eq!(config.sheet_name, "Art");
        assert_eq!(config.cell_height, 30.0);
        assert_eq!(config.threads, Some(2));
    }

    #[test]
    fn test_normalize_leaves_other_arguments() {
        let args = normalize_args(["pixel_sheet", "-pix=8", "-x", "-path", "-print", "--", "-print"]);
        let expected: Vec<OsString> = ["pixel_sheet", "--pix=8", "-x", "--path", "--print", "--", "-print"]
            .into_iter()
            .map(OsString::from)
            .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(Cli::try_parse_args(["pixel_sheet", "-pix", "4"]).is_err());
    }
}
