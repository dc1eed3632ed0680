use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bgstrip::{ExtensionSet, FileOutcome, StripConfig, derive_output_path, process_directory_with};
use bgstrip::{ProcessingFailure, strip_file_to_path};

use super::args::CliArgs;
use super::errors::AppError;

/// Build the effective config: defaults, then the JSON file, then flags.
pub fn resolve_config(args: &CliArgs) -> Result<StripConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => StripConfig::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => StripConfig::default(),
    };

    if let Some(dir) = &args.input_dir {
        config.directory = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = Some(dir.clone());
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(exts) = &args.extensions {
        config.extensions = ExtensionSet::new(exts);
    }
    if config.extensions.is_empty() {
        return Err(AppError::EmptyExtensions);
    }

    Ok(config)
}

/// Console line for one file.
pub fn format_outcome(input: &Path, outcome: &FileOutcome) -> String {
    match outcome {
        Ok(output) => format!("Processed: {} -> {}", input.display(), output.display()),
        Err(failure) => failure.to_string(),
    }
}

fn report_outcome(input: &Path, outcome: &FileOutcome) {
    println!("{}", format_outcome(input, outcome));
}

fn process_single_file(input: &Path, output: Option<&Path>, config: &StripConfig) {
    let output = match output {
        Some(out) => out.to_path_buf(),
        None => derive_output_path(input, config.output_dir.as_deref()),
    };

    let outcome = match strip_file_to_path(input, &output, config.threshold) {
        Ok(stats) => {
            info!(
                "Cleared {} of {} pixels ({}x{})",
                stats.cleared,
                stats.total_pixels(),
                stats.width,
                stats.height
            );
            Ok(output)
        }
        Err(e) => {
            warn!("Error processing {:?}: {}", input, e);
            Err(ProcessingFailure::new(input, e))
        }
    };
    report_outcome(input, &outcome);
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = resolve_config(&args)?;

    if let Some(input) = &args.input {
        if let Some(dir) = &config.output_dir {
            std::fs::create_dir_all(dir)?;
        }
        process_single_file(input, args.output.as_deref(), &config);
        return Ok(());
    }

    info!("Starting batch processing from directory: {:?}", config.directory);
    if let Some(dir) = &config.output_dir {
        info!("Output directory: {:?}", dir);
    }
    info!("Extensions: {}", config.extensions);

    let report = process_directory_with(&config, report_outcome).map_err(AppError::from)?;

    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    Ok(())
}
