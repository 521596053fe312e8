use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use dashviz::{Dashboard, DashboardConfig};
use dashviz::{activity, render, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dashviz",
    version,
    about = "Render dashboard sparkline charts & drive dashboard loader state"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the employee/ssh/signs charts from a data file and write SVGs.
    Render(RenderArgs),
    /// Step the approval loader and print each state.
    Loader(LoaderArgs),
    /// Bucket event timestamps into the recent-activity series.
    Activity(ActivityArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Chart data (.json, or .csv with header label,employee,ssh,signs).
    #[arg(short, long)]
    input: PathBuf,
    /// Directory the `{key}.svg` files are written to.
    #[arg(short, long)]
    out_dir: PathBuf,
    /// Dashboard config (JSON). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pixel scale of the 240x130 viewport (default 4, at most 64).
    #[arg(
        long,
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..=render::MAX_SCALE as i64)
    )]
    scale: u32,
    /// Let the scheduled refresh of the employee chart run before rendering.
    #[arg(long, default_value_t = false)]
    refresh: bool,
    /// Also write the chart geometry as JSON.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LoaderArgs {
    /// Number of steps to take. The first step from idle enters `request`,
    /// so a full cycle back to `request` takes 5.
    #[arg(long, default_value_t = 4)]
    steps: u32,
    /// Finish with success and wait for the automatic hide.
    #[arg(long, default_value_t = false)]
    finish: bool,
}

#[derive(Args, Debug)]
struct ActivityArgs {
    /// CSV with a `unix_seconds` column.
    #[arg(short, long)]
    input: PathBuf,
    /// Reference time (RFC 3339). Defaults to now.
    #[arg(long)]
    now: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Loader(args) => cmd_loader(args),
        Command::Activity(args) => cmd_activity(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = match args.config.as_ref() {
        Some(p) => DashboardConfig::from_json_file(p)?,
        None => DashboardConfig::default(),
    };
    let data = storage::load_chart_data(&args.input)?;

    let mut dash = Dashboard::with_default_charts(config);
    let report = dash.init_charts(&data.labels, &data.employee, &data.ssh, &data.signs);
    for (key, err) in &report.failed {
        eprintln!("Skipped chart {}: {}", key, err);
    }
    if report.drawn.is_empty() {
        bail!("no chart could be drawn from {}", args.input.display());
    }
    if args.refresh {
        let delay = dash.config().refresh_delay();
        dash.advance(delay);
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    for (key, target) in dash.charts() {
        if target.line.points().is_empty() {
            continue;
        }
        let path = args.out_dir.join(format!("{key}.svg"));
        render::write_chart_svg(target, &path, args.scale)?;
        eprintln!("Wrote chart to {}", path.display());
    }

    if let Some(path) = args.snapshot.as_ref() {
        storage::save_snapshot_json(&dash, path)?;
        eprintln!("Wrote snapshot to {}", path.display());
    }
    Ok(())
}

fn cmd_loader(args: LoaderArgs) -> Result<()> {
    let mut dash = Dashboard::default();
    for _ in 0..args.steps {
        dash.loader_step();
        println!("step    -> {}", dash.loader_state());
    }
    if args.finish {
        dash.loader_finish_success();
        println!("finish  -> {}", dash.loader_state());
        dash.run_until_idle();
        println!("auto    -> {}", dash.loader_state());
    }
    Ok(())
}

fn cmd_activity(args: ActivityArgs) -> Result<()> {
    let timestamps = storage::load_timestamps(&args.input)?;
    let now = match args.now.as_deref() {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --now `{}`, expected RFC 3339", s))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    let (labels, series) = activity::recent_activity(&timestamps, now)?;
    let out = serde_json::json!({ "labels": labels, "series": series });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
