//! Command-line interface for the converter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{display_date, ConverterConfig, OutputFormat, DEFAULT_OUTPUT_FILE};
use crate::converter::{convert_document, convert_paths, discover_documents};
use crate::error::Result;
use crate::output::save_batch;
use crate::types::outline;

/// LexVis Converter - Convert Korean statute documents to structured JSON.
#[derive(Parser)]
#[command(name = "lexvis-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every .docx statute in a directory into one output file.
    Convert {
        /// Directory containing .docx files (default: LEXVIS_INPUT_DIR or .)
        input_dir: Option<PathBuf>,

        /// Output file (default: LEXVIS_OUTPUT or law_converted.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: json or yaml (default: LEXVIS_FORMAT or json)
        #[arg(short, long)]
        format: Option<String>,

        /// Number of leading lines searched for header metadata
        #[arg(long)]
        header_lines: Option<usize>,
    },

    /// Print the metadata and outline of a single .docx statute.
    Inspect {
        /// Path to the .docx file
        file: PathBuf,

        /// Number of leading lines searched for header metadata
        #[arg(long)]
        header_lines: Option<usize>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let env_config = ConverterConfig::from_env();

    match cli.command {
        Commands::Convert {
            input_dir,
            output,
            format,
            header_lines,
        } => {
            let config = resolve_config(env_config, input_dir, output, format.as_deref(), header_lines)?;
            convert_command(&config)
        }
        Commands::Inspect { file, header_lines } => {
            inspect_command(&file, header_lines.unwrap_or(env_config.header_lines))
        }
    }
}

/// Apply command-line overrides on top of the environment settings.
fn resolve_config(
    env_config: ConverterConfig,
    input_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<&str>,
    header_lines: Option<usize>,
) -> Result<ConverterConfig> {
    let mut config = env_config;

    if let Some(dir) = input_dir {
        config.input_dir = dir;
    }
    if let Some(format) = format {
        config = config.with_format(format.parse()?);
    }
    match output {
        Some(path) => config = config.with_output_path(path),
        None if config.format == OutputFormat::Yaml
            && config.output_path == Path::new(DEFAULT_OUTPUT_FILE) =>
        {
            let path = config.output_path.with_extension("yaml");
            config = config.with_output_path(path);
        }
        None => {}
    }
    if let Some(n) = header_lines {
        config = config.with_header_lines(n);
    }

    Ok(config)
}

/// Execute the convert command.
fn convert_command(config: &ConverterConfig) -> Result<()> {
    let paths = discover_documents(&config.input_dir)?;

    if paths.is_empty() {
        println!(
            "{} no .docx files found in {}",
            style("Warning:").yellow().bold(),
            config.input_dir.display()
        );
        return Ok(());
    }

    println!(
        "{} {} documents from {}",
        style("Converting").bold(),
        style(paths.len()).cyan(),
        style(config.input_dir.display()).green()
    );
    println!();

    let pb = ProgressBar::new(paths.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let report = convert_paths(&paths, config.header_lines, |path| {
        if let Some(name) = path.file_name() {
            pb.set_message(name.to_string_lossy().into_owned());
        }
        pb.inc(1);
    });

    pb.finish_and_clear();

    for failure in &report.failures {
        println!(
            "  {} {}",
            style("Skipped:").red().bold(),
            failure.message
        );
    }

    save_batch(&report.records, &config.output_path, config.format)?;

    let articles: usize = report.records.iter().map(|r| r.article_count()).sum();
    println!(
        "  Documents: {}/{}",
        report.records.len(),
        report.total()
    );
    println!("  Articles: {articles}");
    if report.has_failures() {
        println!("  Failed: {}", style(report.failures.len()).yellow().bold());
    }

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        config.output_path.display()
    );

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(file: &Path, header_lines: usize) -> Result<()> {
    let record = convert_document(file, header_lines)?;

    let or_unknown = |date: &str| {
        if date.is_empty() {
            "-".to_string()
        } else {
            display_date(date)
        }
    };

    println!("{}", style(&record.name).bold());
    println!("  ID: {}", record.id);
    println!("  Department: {}", style(&record.department).green());
    println!("  Promulgated: {}", or_unknown(&record.promulgation_date));
    println!("  In force: {}", or_unknown(&record.enforcement_date));
    println!("  Articles: {}", record.article_count());
    println!();
    print!("{}", outline(&record.contents));

    Ok(())
}
