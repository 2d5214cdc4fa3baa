//! Tests for command-line parsing and batch rendering

#[cfg(test)]
mod tests {
    use clap::Parser;
    use exprart::io::cli::{BatchRenderer, Cli};
    use exprart::io::configuration::{
        DEFAULT_COUNT, DEFAULT_DEPTH_BUDGET, DEFAULT_SEED, DEFAULT_WIDTH,
    };
    use exprart::io::navigation::Direction;
    use exprart::{ArtError, generate};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_test_cli(output_dir: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "program".to_owned(),
            output_dir.display().to_string(),
            "--quiet".to_owned(),
            "--width".to_owned(),
            "4".to_owned(),
        ];
        args.extend(extra.iter().map(|arg| (*arg).to_owned()));
        Cli::parse_from(args)
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.count, DEFAULT_COUNT);
        assert_eq!(cli.depth, DEFAULT_DEPTH_BUDGET);
        assert_eq!(cli.dimensions(), (DEFAULT_WIDTH, DEFAULT_WIDTH));
        assert_eq!(cli.direction(), Direction::Forward);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert!(!cli.print_expression);
    }

    // Tests CLI parsing with every option set
    // Verified by swapping short flag letters
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "out", "-s", "-7", "-c", "3", "-b", "-w", "64", "-H", "32", "-d", "6",
            "-q", "-n", "-p",
        ]);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.seed, -7);
        assert_eq!(cli.start_index(), -7);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.direction(), Direction::Backward);
        assert_eq!(cli.dimensions(), (64, 32));
        assert_eq!(cli.generation_config().depth_budget, 6);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
        assert!(cli.print_expression);
    }

    // Tests a random start cannot be combined with an explicit seed
    // Verified by removing the conflict
    #[test]
    fn test_random_start_conflicts_with_seed() {
        assert!(Cli::try_parse_from(["program", "--seed", "3", "--random-start"]).is_err());

        let cli = Cli::parse_from(["program", "--random-start"]);
        let start = cli.start_index();
        assert!((i64::from(i32::MIN)..=i64::from(i32::MAX)).contains(&start));
    }

    // Tests output file names use the signed index label
    // Verified by changing the output prefix
    #[test]
    fn test_output_path_generation() {
        let path = BatchRenderer::get_output_path(Path::new("renders"), "-3");
        assert_eq!(path, PathBuf::from("renders/artwork_-3.png"));
    }

    // Tests a run renders consecutive indices to PNG files
    // Verified by stepping twice per artwork
    #[test]
    fn test_process_writes_consecutive_indices() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cli = create_test_cli(temp_dir.path(), &["--seed", "-1", "--count", "3"]);

        let written = BatchRenderer::new(cli).process().expect("batch renders");
        let expected: Vec<PathBuf> = ["-1", "0", "1"]
            .iter()
            .map(|label| BatchRenderer::get_output_path(temp_dir.path(), label))
            .collect();
        assert_eq!(written, expected);
        assert!(expected.iter().all(|path| path.exists()));
    }

    // Tests backward runs visit previous indices
    // Verified by ignoring the backward flag
    #[test]
    fn test_process_backward() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cli = create_test_cli(temp_dir.path(), &["--seed", "5", "--count", "2", "--backward"]);

        let written = BatchRenderer::new(cli).process().expect("batch renders");
        assert_eq!(
            written,
            vec![
                BatchRenderer::get_output_path(temp_dir.path(), "5"),
                BatchRenderer::get_output_path(temp_dir.path(), "4"),
            ]
        );
    }

    // Tests rendered files hold the seed's pixels
    // Verified by rendering from a shared random stream
    #[test]
    fn test_process_output_matches_generate() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let cli = create_test_cli(temp_dir.path(), &["--seed", "2"]);

        let written = BatchRenderer::new(cli).process().expect("batch renders");
        let path = written.first().expect("one artwork written");
        let decoded = image::open(path).expect("PNG decodes").to_rgba8();

        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(
            decoded.into_raw(),
            generate(2, 4, 4).expect("generation succeeds")
        );
    }

    // Tests skip logic when output file exists
    // Verified by removing skip check
    #[test]
    fn test_skip_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let existing = BatchRenderer::get_output_path(temp_dir.path(), "0");
        fs::write(&existing, "placeholder").expect("Failed to write file");

        let cli = create_test_cli(temp_dir.path(), &["--count", "2"]);
        let written = BatchRenderer::new(cli).process().expect("batch renders");

        assert_eq!(
            written,
            vec![BatchRenderer::get_output_path(temp_dir.path(), "1")]
        );
        assert_eq!(
            fs::read(&existing).expect("Failed to read file"),
            b"placeholder"
        );

        let cli_no_skip = create_test_cli(temp_dir.path(), &["--no-skip"]);
        let rewritten = BatchRenderer::new(cli_no_skip)
            .process()
            .expect("batch renders");
        assert_eq!(rewritten, vec![existing.clone()]);
        assert!(image::open(&existing).is_ok());
    }

    // Tests invalid run parameters are rejected
    // Verified by rendering an empty batch
    #[test]
    fn test_process_rejects_invalid_parameters() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let zero_count = create_test_cli(temp_dir.path(), &["--count", "0"]);
        assert!(matches!(
            BatchRenderer::new(zero_count).process(),
            Err(ArtError::InvalidParameter {
                parameter: "count",
                ..
            })
        ));

        let deep = create_test_cli(temp_dir.path(), &["--depth", "1000"]);
        assert!(matches!(
            BatchRenderer::new(deep).process(),
            Err(ArtError::InvalidParameter {
                parameter: "depth_budget",
                ..
            })
        ));
        let mut entries = fs::read_dir(temp_dir.path()).expect("Failed to read dir");
        assert!(entries.next().is_none(), "Nothing should be rendered");

        let shallow = create_test_cli(temp_dir.path(), &["--depth", "1"]);
        assert!(matches!(
            BatchRenderer::new(shallow).process(),
            Err(ArtError::BudgetExhausted { .. })
        ));

        let dir = temp_dir.path().display().to_string();
        let zero_width = Cli::parse_from(["program", dir.as_str(), "--quiet", "--width", "0"]);
        assert!(BatchRenderer::new(zero_width).process().is_err());
    }

    // Tests progress display is only created when not quiet
    // Verified by forcing progress on in quiet mode
    #[test]
    fn test_quiet_mode() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().display().to_string();

        let cli_quiet = Cli::parse_from(["program", dir.as_str(), "--quiet", "-w", "2"]);
        assert!(!cli_quiet.should_show_progress());
        assert!(BatchRenderer::new(cli_quiet).process().is_ok());

        let cli_normal = Cli::parse_from(["program", dir.as_str(), "--no-skip", "-w", "2"]);
        assert!(cli_normal.should_show_progress());
        assert!(BatchRenderer::new(cli_normal).process().is_ok());
    }
}
