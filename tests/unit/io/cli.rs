//! Tests for command-line parsing and output orchestration

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use kitedart::algorithm::dedup::DedupStrategy;
    use kitedart::io::cli::{Cli, DedupMode, OutputFormat, TilingProcessor};
    use kitedart::io::configuration::{
        DEFAULT_GENERATIONS, DEFAULT_HEIGHT, DEFAULT_QUANTIZATION_DIGITS, DEFAULT_WIDTH,
        GIF_FRAME_DELAY_MS,
    };
    use kitedart::io::error::TilingError;
    use kitedart::io::palette::{Palette, PaletteName};
    use std::path::{Path, PathBuf};

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("kitedart").chain(args.iter().copied()))
    }

    // Tests defaults when no arguments are given
    // Verified by changing the default output name
    #[test]
    fn test_parse_defaults() {
        let cli = parse(&[]);

        assert_eq!(cli.outputs, vec![PathBuf::from("penrose.png")]);
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.generations, DEFAULT_GENERATIONS);
        assert_eq!(cli.dedup, DedupMode::Exact);
        assert_eq!(cli.digits, DEFAULT_QUANTIZATION_DIGITS);
        assert_eq!(cli.palette, PaletteName::Classic);
        assert_eq!(cli.frame_delay, GIF_FRAME_DELAY_MS);
        assert!(cli.should_show_progress());
        assert!(cli.skip_existing());
        assert!(cli.validate().is_ok());
    }

    // Tests every argument
    // Verified by dropping the short height flag
    #[test]
    fn test_parse_all_args() {
        let cli = parse(&[
            "-o", "a.svg", "--output", "b.gif", "-w", "640", "-H", "480", "-g", "4", "-d",
            "quantized", "--digits", "8", "-p", "google", "--frame-delay", "250", "-q", "-n",
        ]);

        assert_eq!(
            cli.outputs,
            vec![PathBuf::from("a.svg"), PathBuf::from("b.gif")]
        );
        assert_eq!((cli.width, cli.height, cli.generations), (640, 480, 4));
        assert_eq!(cli.dedup_strategy(), DedupStrategy::Quantized { digits: 8 });
        assert_eq!(cli.palette(), Palette::GOOGLE);
        assert_eq!(cli.frame_delay, 250);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests out-of-range parameters are rejected by name
    // Verified by accepting a zero width
    #[test]
    fn test_validate_ranges() {
        let rejected = |args: &[&str], name: &str| match parse(args).validate() {
            Err(TilingError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, name),
            other => panic!("expected {name} to be rejected, got {other:?}"),
        };

        rejected(&["-w", "0"], "width");
        rejected(&["-H", "20000"], "height");
        rejected(&["-g", "11"], "generations");
        rejected(&["-d", "quantized", "--digits", "0"], "digits");
        rejected(&["-d", "quantized", "--digits", "13"], "digits");

        assert!(parse(&["--digits", "0"]).validate().is_ok());
        assert!(parse(&["-g", "0"]).validate().is_ok());
    }

    // Tests the cache key follows the parsed parameters
    // Verified by swapping width and height in the key
    #[test]
    fn test_tiling_key() {
        let key = parse(&["-w", "300", "-H", "200", "-g", "2"]).tiling_key();
        assert_eq!(key.width().to_bits(), 300.0_f64.to_bits());
        assert_eq!(key.height().to_bits(), 200.0_f64.to_bits());
        assert_eq!(key.generations(), 2);
        assert_eq!(key.strategy(), DedupStrategy::Exact);
    }

    // Tests output formats by extension
    // Verified by making matching case-sensitive
    #[test]
    fn test_output_format() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a.png")).ok(),
            Some(OutputFormat::Png)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/b.SVG")).ok(),
            Some(OutputFormat::Svg)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("c.Gif")).ok(),
            Some(OutputFormat::Gif)
        );
        assert!(matches!(
            OutputFormat::from_path(Path::new("d.jpg")),
            Err(TilingError::UnsupportedFormat { .. })
        ));
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }

    // Tests still images of one run share a single computed tiling
    // Verified by bypassing the cache for SVG output
    #[test]
    fn test_process_writes_outputs() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let png = temp_dir.path().join("t.png");
        let svg = temp_dir.path().join("t.svg");
        let gif = temp_dir.path().join("t.gif");

        let cli = parse(&[
            "-o",
            png.to_str().expect("utf8"),
            "-o",
            svg.to_str().expect("utf8"),
            "-o",
            gif.to_str().expect("utf8"),
            "-w",
            "96",
            "-H",
            "54",
            "-g",
            "2",
            "-q",
        ]);
        let mut processor = TilingProcessor::new(cli);
        processor.process().expect("process");

        assert!(png.exists() && svg.exists() && gif.exists());
        assert_eq!(processor.cache().len(), 1);
        assert_eq!(processor.cache().stats.misses, 1);
        assert_eq!(processor.cache().stats.hits, 1);
    }

    // Tests existing outputs are skipped unless --no-skip is given
    // Verified by ignoring the skip flag
    #[test]
    fn test_process_skips_existing() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let path = temp_dir.path().join("keep.svg");
        std::fs::write(&path, "original").expect("seed file");
        let arg = path.to_str().expect("utf8");

        TilingProcessor::new(parse(&["-o", arg, "-g", "0", "-q"]))
            .process()
            .expect("process");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "original");

        TilingProcessor::new(parse(&["-o", arg, "-g", "0", "-q", "-n"]))
            .process()
            .expect("process");
        assert!(
            std::fs::read_to_string(&path)
                .expect("read")
                .starts_with("<svg")
        );
    }

    // Tests unsupported extensions fail before anything is written
    // Verified by checking formats lazily per output
    #[test]
    fn test_process_rejects_unknown_format() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let good = temp_dir.path().join("first.png");
        let bad = temp_dir.path().join("second.tiff");

        let result = TilingProcessor::new(parse(&[
            "-o",
            good.to_str().expect("utf8"),
            "-o",
            bad.to_str().expect("utf8"),
            "-q",
        ]))
        .process();

        assert!(matches!(result, Err(TilingError::UnsupportedFormat { .. })));
        assert!(!good.exists());
    }

    // Tests the dedup help points users at quantized matching
    // Verified by shortening the doc comment to its first sentence
    #[test]
    fn test_dedup_help_mentions_quantized() {
        let command = Cli::command();
        let help = command
            .get_arguments()
            .find(|arg| arg.get_id() == "dedup")
            .and_then(|arg| arg.get_help())
            .map(ToString::to_string)
            .unwrap_or_default();

        assert!(help.contains("rounding error"), "help was: {help}");
        assert!(help.contains("quantized"), "help was: {help}");
    }
}
