/// Command-line runner for the landslide/background CRN mixing model.
/// Prints the outlet concentration and the erosion rate it implies.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crn_core::{CatchmentReport, InputParameters};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "crn-mix",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mix landslide and background CRN concentrations at a catchment outlet",
    allow_negative_numbers = true
)]
struct Args {
    /// JSON parameter file; keys left out keep the Dingle et al. (2018) defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON instead of the labeled summary.
    #[arg(long)]
    json: bool,

    /// Log level on stderr (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(flatten)]
    overrides: Overrides,
}

/// Per-parameter overrides, applied on top of the config file.
#[derive(clap::Args, Debug, Default)]
struct Overrides {
    /// Catchment area, km².
    #[arg(long)]
    catchment_area: Option<f64>,
    /// Rock density, t/m³.
    #[arg(long)]
    rock_density: Option<f64>,
    /// Attenuation length, g/cm².
    #[arg(long)]
    attenuation: Option<f64>,
    /// Background erosion rate, mm/yr.
    #[arg(long)]
    background_erosion: Option<f64>,
    /// Background erosion rate inside the landslide area, mm/yr.
    #[arg(long)]
    landslide_erosion: Option<f64>,
    /// Share of the catchment affected by landslides, percent.
    #[arg(long)]
    area_percent: Option<f64>,
    /// Mean landslide depth, m.
    #[arg(long)]
    depth: Option<f64>,
    /// Regional surface production rate, atoms/g/yr.
    #[arg(long)]
    regional_production: Option<f64>,
    /// Landslide surface production rate, atoms/g/yr.
    #[arg(long)]
    landslide_production: Option<f64>,
    /// Flux delay factor, 1/yr.
    #[arg(long)]
    delay: Option<f64>,
    /// Radioactive decay constant, 1/yr.
    #[arg(long)]
    decay_constant: Option<f64>,
}

impl Overrides {
    fn apply(&self, p: &mut InputParameters) {
        let slots = [
            (self.catchment_area, &mut p.catchment_area_km2),
            (self.rock_density, &mut p.rock_density),
            (self.attenuation, &mut p.attenuation_length),
            (self.background_erosion, &mut p.background_erosion_rate),
            (self.landslide_erosion, &mut p.landslide_erosion_rate),
            (self.area_percent, &mut p.landslide_area_percent),
            (self.depth, &mut p.landslide_depth_m),
            (self.regional_production, &mut p.regional_production),
            (self.landslide_production, &mut p.landslide_production),
            (self.delay, &mut p.flux_delay_factor),
            (self.decay_constant, &mut p.decay_constant),
        ];
        for (value, slot) in slots {
            if let Some(v) = value {
                *slot = v;
            }
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging(level: &str) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn load_params(args: &Args) -> Result<InputParameters> {
    let mut params = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => InputParameters::default(),
    };
    args.overrides.apply(&mut params);
    Ok(params)
}

fn render_text(report: &CatchmentReport) -> String {
    report
        .summary_lines()
        .iter()
        .map(|line| format!("{line}\n"))
        .collect()
}

fn render_json(report: &CatchmentReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialising report")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let params = load_params(&args)?;
    tracing::debug!(?params, "resolved parameters");

    let report = crn_core::run(&params).context("model run failed")?;

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crn_core::CrnError;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("crn-mix").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_gives_paper_defaults() {
        let params = load_params(&parse(&[])).unwrap();
        assert_eq!(params, InputParameters::default());
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let params = load_params(&parse(&["--depth", "3.5", "--delay", "0.2"])).unwrap();
        assert_eq!(params.landslide_depth_m, 3.5);
        assert_eq!(params.flux_delay_factor, 0.2);
        assert_eq!(params.regional_production, 35.0);
    }

    #[test]
    fn negative_override_reaches_validation() {
        let params = load_params(&parse(&["--depth", "-1"])).unwrap();
        assert!(matches!(
            crn_core::run(&params),
            Err(CrnError::InvalidParameter { name: "landslide_depth_m", .. })
        ));
    }

    #[test]
    fn config_file_then_overrides() {
        let path = std::env::temp_dir().join(format!("crn-mix-test-{}.json", std::process::id()));
        fs::write(&path, r#"{ "catchment_area_km2": 500.0, "landslide_depth_m": 1.0 }"#).unwrap();
        let args = parse(&["--config", path.to_str().unwrap(), "--depth", "4.0"]);
        let params = load_params(&args).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(params.catchment_area_km2, 500.0);
        assert_eq!(params.landslide_depth_m, 4.0);
    }

    #[test]
    fn missing_config_is_an_error() {
        let args = parse(&["--config", "/nonexistent/crn-mix.json"]);
        let err = load_params(&args).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn text_report_has_ten_ordered_lines() {
        let report = crn_core::run(&InputParameters::default()).unwrap();
        let text = render_text(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Landslide area: 115000000 m2");
        assert_eq!(lines[1], "Landslide volume: 230000000 m3");
        assert!(lines[9].starts_with("Actual Volumetric Flux: 658.07"));
    }

    #[test]
    fn json_report_carries_inputs_and_results() {
        let params = load_params(&parse(&["--json", "--delay", "0.5"])).unwrap();
        let report = crn_core::run(&params).unwrap();
        let v: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        // 37.0737 background + half of the 621 Mt landslide mass.
        let actual = v["inversion"]["actual_flux_mt"].as_f64().unwrap();
        assert!((actual - 347.5737).abs() < 1e-9, "actual flux {actual}");
        assert_eq!(v["inputs"]["flux_delay_factor"], 0.5);
        assert_eq!(v["landslide"]["regime"]["kind"], "shallow");
    }
}
