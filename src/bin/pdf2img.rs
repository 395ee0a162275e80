//! CLI binary for pdf2img.
//!
//! A thin shim over the library crate that maps CLI flags to a
//! `BatchConfig`, runs the batch and prints a boxed report.

use anyhow::{Context, Result};
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf2img::{
    failure_report, run_batch, success_report, BatchConfig, BatchProgressCallback, ImageType,
    PdfiumEngine, ProgressCallback, RunSummary,
};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress: a bar over the matched files plus one line per file.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    /// Spinner until `on_batch_start` reports how many files there are.
    fn new_dynamic() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Scanning input directory…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }

    fn activate_bar(&self, total: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} files  {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(TICKS);

        self.bar.set_length(total as u64);
        self.bar.set_style(progress_style);
        self.bar.set_prefix("Converting");
    }

    fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl BatchProgressCallback for CliProgressCallback {
    fn on_batch_start(&self, total_files: usize) {
        self.activate_bar(total_files);
    }

    fn on_file_start(&self, _index: usize, _total: usize, path: &Path) {
        self.bar.set_message(file_name(path));
    }

    fn on_file_complete(&self, index: usize, total: usize, path: &Path, images: usize) {
        self.bar.println(format!(
            "  {} {:>3}/{:<3} {}  {}",
            green("✓"),
            index,
            total,
            file_name(path),
            dim(&format!("{images} image(s)")),
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, _summary: &RunSummary) {
        self.clear();
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Every PDF in ./scans → ./scans/<name>_<page>.png at 150 DPI
  pdf2img scans png

  # JPEG at 300 DPI into a separate directory
  pdf2img scans jpg --dpi 300 --output_dir scans/images

  # Convert, then delete the PDFs (only if every file converted)
  pdf2img scans tiff --input_delete

OUTPUT NAMES:
  doc.pdf (1 page)    → doc.png
  doc.pdf (12 pages)  → doc_01.png … doc_12.png

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH     Path to libpdfium (file or directory)
  PDF2IMG_DPI         Default for --dpi
  PDF2IMG_OUTPUT_DIR  Default for --output_dir
  RUST_LOG            Log filter (overrides --verbose)

EXIT STATUS:
  0  every PDF converted
  1  the batch stopped on an error (reported in the box)
"#;

/// Convert every page of the PDFs in a directory to images.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2img",
    version,
    about = "Convert every page of the PDFs in a directory to image files",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory holding the PDFs (non-recursive, *.pdf in any case).
    input_dir: PathBuf,

    /// Image format: jpg, jpeg, png, gif or tiff (lowercase or uppercase).
    #[arg(value_enum)]
    image_type: ImageTypeArg,

    /// Rendering resolution in dots per inch.
    #[arg(long, env = "PDF2IMG_DPI", default_value_t = 150,
          value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Output directory. Default (or empty): next to each PDF.
    #[arg(long = "output_dir", visible_alias = "output-dir", env = "PDF2IMG_OUTPUT_DIR",
          value_parser = OsStringValueParser::new().map(PathBuf::from))]
    output_dir: Option<PathBuf>,

    /// Delete the source PDFs after every file converted.
    #[arg(long = "input_delete", visible_alias = "input-delete")]
    input_delete: bool,

    /// Disable progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ImageTypeArg {
    #[value(alias = "JPG")]
    Jpg,
    #[value(alias = "JPEG")]
    Jpeg,
    #[value(alias = "PNG")]
    Png,
    #[value(alias = "GIF")]
    Gif,
    #[value(alias = "TIFF")]
    Tiff,
}

impl From<ImageTypeArg> for ImageType {
    fn from(v: ImageTypeArg) -> Self {
        match v {
            ImageTypeArg::Jpg => ImageType::Jpg,
            ImageTypeArg::Jpeg => ImageType::Jpeg,
            ImageTypeArg::Png => ImageType::Png,
            ImageTypeArg::Gif => ImageType::Gif,
            ImageTypeArg::Tiff => ImageType::Tiff,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The progress bar gives all the feedback that matters; only errors are
    // logged while it is visible.
    let show_progress = !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let progress = show_progress.then(CliProgressCallback::new_dynamic);

    let result = run(&cli, progress.clone());

    if let Some(ref p) = progress {
        p.clear();
    }

    match result {
        Ok(summary) => {
            print!("{}", success_report(&summary));
            ExitCode::SUCCESS
        }
        Err(e) => {
            print!("{}", failure_report(&format!("{e:#}")));
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli, progress: Option<Arc<CliProgressCallback>>) -> Result<RunSummary> {
    let engine = PdfiumEngine::bind().context("PDF engine unavailable")?;
    let config = build_config(cli, progress.map(|p| p as ProgressCallback))?;
    let summary = run_batch(&engine, &config)?;
    Ok(summary)
}

/// Map CLI args to `BatchConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<BatchConfig> {
    let mut builder = BatchConfig::builder(&cli.input_dir)
        .image_type(cli.image_type.into())
        .dpi(cli.dpi)
        .delete_inputs(cli.input_delete);

    if let Some(ref dir) = cli.output_dir {
        builder = builder.output_dir(dir);
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pdf2img").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["in", "png"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert_eq!(cli.image_type, ImageTypeArg::Png);
        assert_eq!(cli.dpi, 150);
        assert_eq!(cli.output_dir, None);
        assert!(!cli.input_delete);
    }

    #[test]
    fn image_type_accepts_lowercase_and_uppercase() {
        for (raw, expected) in [
            ("JPG", ImageType::Jpg),
            ("jpeg", ImageType::Jpeg),
            ("JPEG", ImageType::Jpeg),
            ("PNG", ImageType::Png),
            ("GIF", ImageType::Gif),
            ("TIFF", ImageType::Tiff),
        ] {
            let cli = parse(&["in", raw]).unwrap();
            assert_eq!(ImageType::from(cli.image_type), expected, "{raw}");
        }
        let cli = parse(&["in", "JPG"]).unwrap();
        assert_eq!(ImageType::from(cli.image_type).extension(), "jpg");
    }

    #[test]
    fn mixed_case_image_type_rejected() {
        for raw in ["Jpg", "pNg", "Tiff"] {
            let err = parse(&["in", raw]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue, "{raw}");
        }
    }

    #[test]
    fn unknown_image_type_rejected() {
        let err = parse(&["in", "bmp"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn extra_positional_is_usage_error() {
        let err = parse(&["in", "png", "150"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn zero_dpi_rejected() {
        assert!(parse(&["in", "png", "--dpi", "0"]).is_err());
        assert!(parse(&["in", "png", "--dpi", "abc"]).is_err());
    }

    #[test]
    fn underscore_and_kebab_flags() {
        let cli = parse(&["in", "png", "--output_dir", "out", "--input_delete"]).unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.input_delete);

        let cli = parse(&["in", "png", "--output-dir", "out", "--input-delete"]).unwrap();
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!(cli.input_delete);
    }

    #[test]
    fn empty_output_dir_falls_back_to_input_dir() {
        let cli = parse(&["in", "png", "--output_dir", ""]).unwrap();
        let config = build_config(&cli, None).unwrap();
        assert_eq!(config.raster.output_dir, None);
        assert_eq!(config.reported_output_dir(), Path::new("in"));
    }

    #[test]
    fn build_config_maps_flags() {
        let cli = parse(&["in", "JPG", "--dpi", "300", "--output_dir", "out"]).unwrap();
        let config = build_config(&cli, None).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.raster.image_type, ImageType::Jpg);
        assert_eq!(config.raster.dpi, 300);
        assert_eq!(config.raster.output_dir, Some(PathBuf::from("out")));
        assert!(!config.delete_inputs);
        assert_eq!(config.reported_output_dir(), Path::new("out"));
    }
}
