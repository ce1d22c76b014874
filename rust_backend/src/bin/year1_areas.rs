//! Year 1 area conversion tool
//!
//! Converts the areas of a Year 1 document into sky outlines, prints a summary
//! and writes the export file the Streamlit download button would produce.
//!
//! # Usage
//!
//! ```bash
//! year1-areas demoArea.json --survey 7 --plot sky_plot.json
//! ```
//!
//! # Environment Variables
//!
//! - `YEAR1_CONFIG`: Path to a `year1.toml` (default: standard locations)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lts_year1::config::{AppConfig, ConfigError};
use lts_year1::geometry::convert_areas;
use lts_year1::io::export::{export_document, local_today};
use lts_year1::io::DocumentLoader;
use lts_year1::services::build_sky_plot;

const USAGE: &str = "usage: year1-areas <document.json> [--survey NN] [--plot <plot.json>]";

#[derive(Debug, Default)]
struct Args {
    document: PathBuf,
    survey: Option<u8>,
    plot: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut document = None;
    let mut args = Args::default();
    let mut raw = env::args().skip(1);

    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--survey" => {
                let value = raw.next().context("--survey needs a value")?;
                let survey = value
                    .parse()
                    .with_context(|| format!("Invalid survey number '{}'", value))?;
                args.survey = Some(survey);
            }
            "--plot" => {
                args.plot = Some(raw.next().context("--plot needs a path")?.into());
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("Unknown option '{}'\n{}", flag, USAGE),
            path if document.is_none() => document = Some(PathBuf::from(path)),
            extra => bail!("Unexpected argument '{}'\n{}", extra, USAGE),
        }
    }

    args.document = document.context(USAGE)?;
    Ok(args)
}

fn load_config() -> Result<AppConfig> {
    if let Ok(path) = env::var("YEAR1_CONFIG") {
        return AppConfig::from_file(&path).with_context(|| format!("Loading {}", path));
    }
    match AppConfig::from_default_location() {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound) => Ok(AppConfig::default()),
        Err(e) => Err(e.into()),
    }
}

/// `RUST_LOG` directives such as `lts_year1=debug`; `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .init();

    let args = parse_args()?;
    let config = load_config()?;

    let text = fs::read_to_string(&args.document)
        .with_context(|| format!("Reading {}", args.document.display()))?;
    let fallback = DocumentLoader::load_default(config.document.default_path.as_deref())
        .context("Loading the default document")?;
    let outcome = DocumentLoader::resolve_with_fallback(&text, &fallback);
    if let Some(reason) = &outcome.rejected {
        warn!("{} rejected ({}); using the default document", args.document.display(), reason);
    }
    let document = &outcome.document;

    let report = convert_areas(document.year1_areas());
    for outline in &report.outlines {
        let centre = outline
            .centroid()
            .map(|c| format!("({:.3}, {:.3})", c.ra, c.dec))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<8} {:<32} t_frac={:<6} vertices={:<3} area={:>10.3} deg2 centre={}",
            outline.kind.as_str(),
            outline.name,
            outline.t_frac,
            outline.len(),
            outline.area(),
            centre
        );
    }
    for skipped in &report.skipped {
        println!("skipped  #{} {}", skipped.index, skipped.reason);
    }

    let survey = args.survey.or(config.export.survey_number);
    let path = export_document(document, &config.export.output_dir, survey, local_today())
        .context("Exporting document")?;
    info!("Export written to {}", path.display());

    if let Some(plot_path) = &args.plot {
        let plot = build_sky_plot(document, None, &config.plot);
        let json = serde_json::to_string_pretty(&plot).context("Serializing sky plot")?;
        fs::write(plot_path, json)
            .with_context(|| format!("Writing {}", plot_path.display()))?;
        info!("Sky plot written to {}", plot_path.display());
    }

    Ok(())
}
