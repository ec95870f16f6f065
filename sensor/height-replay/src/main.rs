//! Height meter session replay.
//!
//! Feeds a recorded session of surface hits through the height meter and
//! prints what the user would have seen on each tick.
//!
//! # Usage
//!
//! - `height-replay session.jsonl` - Replay with default settings
//! - `height-replay --config meter.json session.jsonl` - Use a device config
//! - `height-replay --format json -` - Read stdin, print one outcome per line
//!
//! Logging is controlled with `RUST_LOG` (default `warn`, `-v` for `debug`).

mod recording;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use height_meter::{HeightMeter, LabelPresenter, MeterConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::recording::{RecordedTick, VisibilityLog, parse_recording};

/// Replay a recorded surface-hit session through the height meter.
#[derive(Parser)]
#[command(name = "height-replay")]
#[command(about = "Replay recorded surface hits through the height meter", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON-lines recording (`-` for stdin)
    #[arg(name = "RECORDING")]
    recording: PathBuf,

    /// JSON meter configuration
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable labels
    Pretty,
    /// One JSON outcome per tick
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => MeterConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MeterConfig::default(),
    };
    let ticks = read_ticks(&cli.recording)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    replay(config, ticks, cli.format, &mut out)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_ticks(path: &Path) -> Result<Vec<RecordedTick>> {
    if path.as_os_str() == "-" {
        return parse_recording(io::stdin().lock());
    }
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_recording(BufReader::new(file))
}

/// Replays `ticks` and writes one entry per tick to `out`.
///
/// Returns the number of confident readings.
fn replay(
    config: MeterConfig,
    ticks: Vec<RecordedTick>,
    format: Format,
    out: &mut impl Write,
) -> Result<usize> {
    let mut meter = HeightMeter::new(config)?;
    let mut visibility = VisibilityLog::default();
    let mut presenter = LabelPresenter::new();
    let mut confirmed = 0usize;

    for (index, mut tick) in ticks.into_iter().enumerate() {
        let pose = tick.camera_height;
        let outcome = meter.tick(&mut tick, &pose, &mut visibility, &mut presenter);
        if outcome.is_some_and(|o| o.reading.confident) {
            confirmed += 1;
        }

        match (format, outcome) {
            (Format::Pretty, Some(_)) => {
                if let Some(label) = presenter.current() {
                    let color = label.color.map_or("-", |c| c.hex());
                    writeln!(out, "[tick {index}] {color} {}", label.text.replace('\n', " | "))?;
                }
            }
            (Format::Pretty, None) => writeln!(out, "[tick {index}] no pose, skipped")?,
            (Format::Json, Some(outcome)) => {
                writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
            }
            (Format::Json, None) => writeln!(out, "null")?,
        }
    }

    info!(
        ticks = meter.ticks(),
        confirmed,
        final_height = ?meter.tracker().smoothed_height(),
        shown = ?visibility.shown(),
        directives = visibility.applied(),
        "Replay finished"
    );
    Ok(confirmed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SESSION: &str = r#"
{"camera_height": 1.0, "hit": {"position": {"x": 0.0, "y": 0.1, "z": -0.4}, "confidence": "within_bounded_polygon", "track_id": 1}}
{"camera_height": 1.0, "hit": {"position": {"x": 0.0, "y": 0.5, "z": -0.4}, "confidence": "estimated", "track_id": 2}}
{"camera_height": null}
{"camera_height": 1.0, "hit": null}
"#;

    fn run(format: Format) -> String {
        let ticks = parse_recording(Cursor::new(SESSION)).unwrap();
        let mut out = Vec::new();
        replay(MeterConfig::default(), ticks, format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn replay_pretty() {
        let output = run(Format::Pretty);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[tick 0] #F1E05A Height 0.900 m (locked)"));
        assert_eq!(lines[1], "[tick 1] - Height 0.500 m (estimating…)");
        assert_eq!(lines[2], "[tick 2] no pose, skipped");
        assert!(lines[3].contains("re-acquiring"));
    }

    #[test]
    fn replay_json() {
        let output = run(Format::Json);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["reading"]["confident"], true);
        assert_eq!(first["directive"]["show_only"], 1);
        assert_eq!(lines[2], "null");
    }

    #[test]
    fn replay_counts_confident_ticks() {
        let session = SESSION.repeat(3);
        let ticks = parse_recording(Cursor::new(session)).unwrap();
        let confirmed = replay(MeterConfig::default(), ticks, Format::Json, &mut Vec::<u8>::new())
            .unwrap();
        assert_eq!(confirmed, 3);
    }

    #[test]
    fn replay_rejects_invalid_config() {
        let config = MeterConfig::default().with_target_height(-1.0);
        let result = replay(config, Vec::new(), Format::Pretty, &mut Vec::<u8>::new());
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses() {
        let cli = Cli::parse_from(["height-replay", "--format", "json", "-v", "session.jsonl"]);
        assert_eq!(cli.format, Format::Json);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }
}
