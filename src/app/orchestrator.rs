//! Main application orchestrator.
//!
//! Coordinates one run of the subset search:
//! 1. Initializes logging (`subset_sum.log`) unless quiet.
//! 2. Loads and validates the numbers and the target.
//! 3. Warns when negative values make the pruning incomplete.
//! 4. Runs the tree-building search (step listing to `tree_details.log`)
//!    or, with `--optimized`, the memoized search.
//! 5. Prints the matches and writes the JSON document if `--output` is set.

use std::io::Write;
use std::path::Path;

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing::{self, ResultDocument};
use super::{verbose_eprintln, verbose_println};

/// Runs the application for parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for invalid input, an unreadable input file, or a
/// failure writing the output document.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    let mut logger_ready = false;
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("subset_sum.log") {
            // Continue without the verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger (subset_sum.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            logger_ready = true;
            verbose_println!(quiet_mode, "Verbose logging initialized to subset_sum.log");
        }
    }

    let result = run_search(&cli, logger_ready);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of subset_sum.log: {}", e);
        }
    }
    result
}

fn run_search(cli: &Cli, logger_ready: bool) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let (numbers, target) = processing::load_input(cli)?;
    processing::warn_about_pruning_gap(&numbers, quiet_mode);

    let document = if cli.optimized {
        let outcome = processing::run_memoized_search(&numbers, target, quiet_mode);
        ResultDocument::from_memoized_search(numbers, target, outcome)
    } else {
        let outcome = if quiet_mode {
            processing::run_tree_search(&numbers, target, quiet_mode, None)
        } else {
            let detail_log_path = Path::new("tree_details.log");
            match file_handler::init_detail_log_writer(detail_log_path) {
                Ok(mut writer) => {
                    let outcome = processing::run_tree_search(
                        &numbers,
                        target,
                        quiet_mode,
                        Some(&mut writer as &mut dyn Write),
                    );
                    if let Err(e) = writer.flush() {
                        verbose_eprintln!(
                            quiet_mode,
                            "[WARNING] Failed to flush tree_details.log: {}",
                            e
                        );
                    }
                    outcome
                }
                Err(e) => {
                    verbose_eprintln!(
                        quiet_mode,
                        "[ERROR] Failed to open tree_details.log: {}. Exploration steps will not be logged.",
                        e
                    );
                    processing::run_tree_search(&numbers, target, quiet_mode, None)
                }
            }
        };
        ResultDocument::from_tree_search(numbers, target, outcome)
    };

    if let Some(output_path) = &cli.output {
        let content = serde_json::to_string_pretty(&document)?;
        file_handler::write_content_to_file(output_path, &content)?;
        verbose_println!(
            quiet_mode,
            "\n[INFO] Result document written to {}",
            output_path.display()
        );
    }

    print_summary(&mut std::io::stdout().lock(), &document, quiet_mode, logger_ready)?;
    Ok(())
}

/// Prints the final summary. The log hint appears only when `subset_sum.log`
/// was actually opened.
fn print_summary(
    writer: &mut dyn Write,
    document: &ResultDocument,
    quiet_mode: bool,
    logger_ready: bool,
) -> std::io::Result<()> {
    if quiet_mode {
        writeln!(writer, "Done. {} subset(s) found.", document.subsets.len())?;
        return Ok(());
    }
    writeln!(
        writer,
        "Found {} subset(s) summing to {}:",
        document.subsets.len(),
        document.target
    )?;
    if !document.subsets.is_empty() {
        writeln!(writer, "{}", processing::format_subsets(&document.subsets))?;
    }
    if logger_ready {
        writeln!(writer, "\nSee 'subset_sum.log' for verbose output.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_cli(numbers: &str, target: &str, output: &Path, optimized: bool) -> Cli {
        Cli {
            numbers: Some(numbers.to_string()),
            file: None,
            target: target.to_string(),
            optimized,
            output: Some(output.to_path_buf()),
            max_numbers: 20,
            quiet: true,
        }
    }

    #[test]
    fn writes_tree_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("result.json");
        run_app(quiet_cli("2 3 5", "5", &out, false)).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["mode"], "tree");
        assert_eq!(json["subsets"][0]["elements"], serde_json::json!([2, 3]));
        assert_eq!(json["subsets"][1]["elements"], serde_json::json!([5]));
        assert_eq!(json["tree"]["children"][0]["name"], "Include 2");
    }

    #[test]
    fn writes_optimized_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("result.json");
        run_app(quiet_cli("1,2,3,4,5", "5", &out, true)).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["mode"], "optimized");
        assert_eq!(json["subsets"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn rejects_bad_target() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("result.json");
        let err = run_app(quiet_cli("1 2", "x", &out, false)).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert!(!out.exists());
    }

    #[test]
    fn reads_numbers_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("numbers.txt");
        std::fs::write(&input, "4, 1\n3 2\n").unwrap();
        let out = dir.path().join("result.json");
        let mut cli = quiet_cli("", "5", &out, false);
        cli.numbers = None;
        cli.file = Some(input);
        run_app(cli).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["numbers"], serde_json::json!([4, 1, 3, 2]));
        assert_eq!(
            json["subsets"],
            serde_json::json!([
                {"elements": [4, 1], "sum": 5, "isValid": true},
                {"elements": [3, 2], "sum": 5, "isValid": true}
            ])
        );
    }

    #[test]
    fn missing_input_file_is_an_invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("result.json");
        let mut cli = quiet_cli("", "5", &out, false);
        cli.numbers = None;
        cli.file = Some(dir.path().join("absent.txt"));
        assert!(matches!(run_app(cli), Err(AppError::InvalidPath(_))));
    }

    fn summary_text(quiet_mode: bool, logger_ready: bool) -> String {
        let outcome = processing::run_tree_search(&[2, 3, 5], 5, true, None);
        let document = ResultDocument::from_tree_search(vec![2, 3, 5], 5, outcome);
        let mut out: Vec<u8> = Vec::new();
        print_summary(&mut out, &document, quiet_mode, logger_ready).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn summary_mentions_log_only_when_logger_is_ready() {
        let with_log = summary_text(false, true);
        assert!(with_log.starts_with("Found 2 subset(s) summing to 5:\n{2, 3} = 5\n{5} = 5\n"));
        assert!(with_log.contains("subset_sum.log"));

        let without_log = summary_text(false, false);
        assert!(!without_log.contains("subset_sum.log"));
        assert_eq!(without_log, "Found 2 subset(s) summing to 5:\n{2, 3} = 5\n{5} = 5\n");
    }

    #[test]
    fn quiet_summary_is_one_line() {
        assert_eq!(summary_text(true, false), "Done. 2 subset(s) found.\n");
    }
}
