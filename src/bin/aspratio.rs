//! aspratio - list nice aspect ratios near a width/height pair.
//!
//! ```text
//! aspratio 768x634
//! aspratio 16:9 --width=1080 --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::Logger;

use aspratio::catalog::DEFAULT_PRECISION;
use aspratio::nearby::{DEFAULT_MAX_VARIANCE_RATIO, DEFAULT_NEAR_COUNT, DEFAULT_NEAR_MARGIN};
use aspratio::{CatalogConfig, RatioRecord, compute_catalog, parse_dimensions};

#[derive(Parser, Debug)]
#[command(name = "aspratio", version)]
#[command(about = "Find nice aspect ratios near WIDTHxHEIGHT or ASPECT:RATIO")]
struct Cli {
    /// Source dimensions, e.g. 768x634 or 16:9
    dimensions: Option<String>,

    /// Project every ratio onto this width (defaults to the source width)
    #[arg(long)]
    width: Option<f64>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Decimal digits for the decimal and golden ratios
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Maximum nearby ratios to list
    #[arg(long, default_value_t = DEFAULT_NEAR_COUNT)]
    near_count: usize,

    /// Nearby search window as a fraction of each dimension
    #[arg(long, default_value_t = DEFAULT_NEAR_MARGIN)]
    near_margin: f64,

    /// Largest height variance ratio accepted for nearby ratios
    #[arg(long, default_value_t = DEFAULT_MAX_VARIANCE_RATIO)]
    max_variance: f64,

    /// Log level written to stderr
    #[arg(long, env = "ASPRATIO_LOG", default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_str(&cli.log_level)?
        .log_to_stderr()
        .start()?;

    let token = cli.dimensions.as_deref().unwrap_or_default();
    let dims = parse_dimensions(token)?;

    let mut config = CatalogConfig::default()
        .precision(cli.precision)
        .near_count(cli.near_count)
        .near_margin(cli.near_margin)
        .max_variance_ratio(cli.max_variance);
    if let Some(width) = cli.width {
        config = config.target_width(width);
    }
    log::debug!("{token}: {config:?}");

    let records = compute_catalog(dims.width, dims.height, &config)
        .with_context(|| format!("cannot compute ratios for {token}"))?;

    if cli.json {
        println!("{}", serde_json::to_string(&records)?);
    } else {
        print_table(&records);
    }
    Ok(())
}

fn print_table(records: &[RatioRecord]) {
    println!(
        "{:<9} {:>14} {:>22} {:>7} {:>17}",
        "type", "ratio", "size", "diff", "diff %"
    );
    for r in records {
        let ratio = format!("{}:{}", r.ratio_x, r.ratio_y);
        let size = format!("{} x {:.2}", r.width, r.height);
        println!(
            "{:<9} {:>14} {:>22} {:>7} {:>17}",
            r.kind.as_str(),
            ratio,
            size,
            r.difference_y,
            r.difference_y_percent
        );
    }
}
