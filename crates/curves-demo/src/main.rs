//! Curves demo CLI
//!
//! Generates a random set of curves, prints them at `t = PI/4`, then prints
//! the circles among them sorted by radius at `t = PI/3` together with the
//! sum of their radii.
//!
//! # Usage
//!
//! ```bash
//! # 20 curves, seeded from OS entropy
//! curves_demo
//!
//! # Reproducible run with 50 curves
//! curves_demo --count 50 --seed 7
//!
//! # Generator settings from a JSON file, report as JSON
//! curves_demo --config generator.json --json
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use std::process;

use curves_core::{CurveError, Result};
use curves_geometry::{
    circles, curve_refs, sample_circles, sample_curves, sort_circles_by_radius, sum_of_radii,
    CurveSample, GeneratorConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!(
        r#"Curves demo CLI

USAGE:
    curves_demo [OPTIONS]

OPTIONS:
    --count <N>       Number of curves to generate (default 20)
    --seed <S>        Seed for the random generator (default: OS entropy)
    --config <PATH>   JSON file with generator settings
                      {{"count", "min_attribute", "max_attribute", "seed"}}
    --json            Print the report as JSON instead of text
    --help            Show this help message

Flags given on the command line override values from --config.
"#
    );
}

#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<PathBuf>,
    count: Option<usize>,
    seed: Option<u64>,
    json: bool,
}

/// Parse command line flags. Returns `Ok(None)` when help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(None),
            "--json" => options.json = true,
            "--count" => options.count = Some(parse_value(arg, iter.next())?),
            "--seed" => options.seed = Some(parse_value(arg, iter.next())?),
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| CurveError::InvalidConfig("--config requires a path".into()))?;
                options.config_path = Some(PathBuf::from(path));
            }
            other => {
                return Err(CurveError::InvalidConfig(format!("unknown argument '{other}'")));
            }
        }
    }

    Ok(Some(options))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let value = value.ok_or_else(|| CurveError::InvalidConfig(format!("{flag} requires a value")))?;
    value
        .parse()
        .map_err(|_| CurveError::InvalidConfig(format!("invalid value for {flag}: '{value}'")))
}

fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| CurveError::Parse(format!("{}: {}", path.display(), e)))
}

fn resolve_config(options: &Options) -> Result<GeneratorConfig> {
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(count) = options.count {
        config.count = count;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    Ok(config)
}

fn write_samples(out: &mut String, title: &str, samples: &[CurveSample]) {
    out.push_str(&format!("=== {title} ===\n\n"));
    for sample in samples {
        out.push_str(&format!("{sample}\n\n"));
    }
}

/// Generate the curves described by `options` and render the report.
fn render_report(options: &Options) -> Result<String> {
    let config = resolve_config(options)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(count = config.count, seed = ?config.seed, "starting curve demo");

    let storage = config.generate(&mut rng)?;
    let all_curves = curve_refs(&storage);
    let curve_samples = sample_curves(&all_curves, PI / 4.0);

    let mut sorted = circles(&all_curves);
    sort_circles_by_radius(&mut sorted);
    let circle_samples = sample_circles(&sorted, PI / 3.0);
    let sum = sum_of_radii(&sorted);

    if options.json {
        let report = serde_json::json!({
            "curves": curve_samples,
            "circles": circle_samples,
            "sum_of_radii": sum,
        });
        return serde_json::to_string_pretty(&report).map_err(|e| CurveError::Parse(e.to_string()));
    }

    let mut out = String::new();
    write_samples(&mut out, "All curves at PI/4", &curve_samples);
    write_samples(&mut out, "All circles at PI/3", &circle_samples);
    out.push_str(&format!("Sum of circles' radii: {sum:.3}"));
    Ok(out)
}

fn run(options: &Options) -> Result<()> {
    let report = render_report(options)?;
    println!("{report}");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}\n", e);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
