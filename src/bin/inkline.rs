use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use inkline::{GestureTrace, Point, Recorder, RecorderConfig, interpolate, to_path_command};

#[derive(Parser, Debug)]
#[command(name = "inkline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fit a point list and print the path string.
    Fit(FitArgs),
    /// Replay a recorded gesture trace through the stroke recorder.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct FitArgs {
    /// Input JSON: an array of `[x, y]` pairs.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write output here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Emit the fitted segments as JSON instead of a path string.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input gesture trace JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the trace's minimum time between commits, in milliseconds.
    #[arg(long)]
    interval_ms: Option<f64>,

    /// Override the trace's minimum distance between commits.
    #[arg(long)]
    min_distance: Option<f64>,

    /// Write the finished strokes as JSON here instead of printing path strings.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Fit(args) => cmd_fit(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let s = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read points '{}'", args.in_path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_str(&s)
        .with_context(|| format!("parse points '{}'", args.in_path.display()))?;
    let points: Vec<Point> = raw.into_iter().map(|[x, y]| Point::new(x, y)).collect();

    let segments = interpolate(&points, None);
    let text = if args.json {
        serde_json::to_string_pretty(&segments)?
    } else {
        to_path_command(&segments)
    };
    emit(args.out.as_deref(), &text)
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let trace = GestureTrace::from_path(&args.in_path)?;

    let base = trace.recorder_config();
    let config = RecorderConfig::from_millis(
        args.interval_ms
            .unwrap_or(base.recording_interval.as_nanos() as f64 / 1e6),
        args.min_distance.unwrap_or(base.min_recording_distance),
    )?;

    let mut recorder = Recorder::new(config);
    let strokes = inkline::replay(&trace, &mut recorder);

    let text = if args.out.is_some() {
        serde_json::to_string_pretty(&strokes)?
    } else {
        strokes
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.d())
            .collect::<Vec<_>>()
            .join("\n")
    };
    emit(args.out.as_deref(), &text)
}

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
