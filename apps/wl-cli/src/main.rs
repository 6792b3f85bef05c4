use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wl_app::{AppError, AppResult, LoadReport, Selection, Session};
use wl_tracks::{TrackEdit, TrackList};
use wl_wells::MissingValuePolicy;

#[derive(Parser)]
#[command(name = "wl-cli")]
#[command(about = "welllog CLI - LAS well log loading and track layout tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize wells in LAS files or folders
    Inspect {
        /// LAS files or folders containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Keep rows with missing values (as NaN) instead of dropping them
        #[arg(long)]
        keep_nan: bool,
        /// Print the summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the union of curve names across wells
    Curves {
        /// LAS files or folders containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Write a configuration file with a selection and track layout
    InitConfig {
        /// Output file (.json for JSON, anything else YAML)
        output: PathBuf,
        /// Well name to select (repeatable)
        #[arg(long = "select")]
        select: Vec<String>,
        /// Comma-separated curves for one track, e.g. GR,RHOB (repeatable)
        #[arg(long = "track")]
        tracks: Vec<String>,
    },
    /// Check a configuration file
    ValidateConfig {
        /// Path to the configuration file
        path: PathBuf,
    },
    /// Render the configured selection to JSON figures
    Render {
        /// Configuration file with the selection and tracks
        #[arg(short, long)]
        config: PathBuf,
        /// Output JSON file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Keep rows with missing values (as NaN) instead of dropping them
        #[arg(long)]
        keep_nan: bool,
        /// LAS files or folders containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            paths,
            keep_nan,
            json,
        } => cmd_inspect(&paths, policy(keep_nan), json),
        Commands::Curves { paths } => cmd_curves(&paths),
        Commands::InitConfig {
            output,
            select,
            tracks,
        } => cmd_init_config(&output, &select, &tracks),
        Commands::ValidateConfig { path } => cmd_validate_config(&path),
        Commands::Render {
            config,
            output,
            keep_nan,
            paths,
        } => cmd_render(&config, output.as_deref(), &paths, policy(keep_nan)),
    }
}

fn policy(keep_nan: bool) -> MissingValuePolicy {
    if keep_nan {
        MissingValuePolicy::KeepNan
    } else {
        MissingValuePolicy::DropRow
    }
}

fn load_session(paths: &[PathBuf], policy: MissingValuePolicy) -> AppResult<Session> {
    let mut session = Session::new();
    let report = wl_app::load_inputs(&mut session.registry, paths, policy)?;
    print_load_report(&report);
    Ok(session)
}

fn print_load_report(report: &LoadReport) {
    for name in &report.duplicates {
        eprintln!("  skipped duplicate well: {}", name);
    }
    for failure in &report.failures {
        eprintln!("  ✗ {}: {}", failure.path.display(), failure.message);
    }
    eprintln!(
        "Loaded {} well(s), {} duplicate(s), {} failure(s)",
        report.loaded.len(),
        report.duplicates.len(),
        report.failures.len()
    );
}

fn cmd_inspect(paths: &[PathBuf], policy: MissingValuePolicy, json: bool) -> AppResult<()> {
    let session = load_session(paths, policy)?;
    let wells = wl_app::list_wells(&session.registry);

    if json {
        let text = serde_json::to_string_pretty(&wells)
            .map_err(|e| AppError::InvalidInput(format!("Failed to serialize wells: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    if wells.is_empty() {
        println!("No wells loaded");
        return Ok(());
    }
    for well in wells {
        println!("{} ({})", well.name, well.source_path.display());
        let unit = well.depth_unit.as_deref().unwrap_or("");
        match well.depth_range {
            Some((lo, hi)) => println!("  Depth: {} - {} {}", lo, hi, unit),
            None => println!("  Depth: empty"),
        }
        println!("  Rows: {} ({} dropped)", well.rows, well.dropped_rows);
        println!("  LAS version: {}", well.las_version);
        println!("  Curves: {}", well.curves.join(", "));
    }
    Ok(())
}

fn cmd_curves(paths: &[PathBuf]) -> AppResult<()> {
    let session = load_session(paths, MissingValuePolicy::DropRow)?;
    for name in wl_app::available_curves(&session.registry) {
        println!("{}", name);
    }
    Ok(())
}

fn cmd_init_config(output: &Path, select: &[String], track_args: &[String]) -> AppResult<()> {
    let selection: Selection = select.iter().cloned().collect();
    let tracks = tracks_from_args(track_args)?;
    wl_app::save_configuration(output, &selection, &tracks)?;
    println!(
        "✓ Wrote {} ({} well(s), {} track(s))",
        output.display(),
        selection.len(),
        tracks.len()
    );
    Ok(())
}

/// One track per argument; the first name fills the primary slot.
fn tracks_from_args(track_args: &[String]) -> AppResult<TrackList> {
    let mut tracks = TrackList::new();
    for arg in track_args {
        let names: Vec<&str> = arg
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();
        let id = tracks.apply(TrackEdit::AddTrack)?;
        for (slot, name) in names.iter().enumerate() {
            let edit = if slot == 0 {
                TrackEdit::AssignCurve {
                    track: id,
                    slot: 0,
                    curve_name: Some(name.to_string()),
                }
            } else {
                TrackEdit::AddCurve {
                    track: id,
                    curve_name: Some(name.to_string()),
                }
            };
            tracks.apply(edit)?;
        }
    }
    Ok(tracks)
}

fn cmd_validate_config(path: &Path) -> AppResult<()> {
    println!("Validating configuration: {}", path.display());
    let (selection, tracks) = wl_app::load_configuration(path)?;
    println!("✓ Configuration is valid");
    println!("  Selected wells: {}", selection.names().join(", "));
    for track in tracks.iter() {
        let names: Vec<&str> = track.curve_names().collect();
        println!(
            "  {}: {} [{}]",
            track.label(),
            if names.is_empty() {
                "-".to_string()
            } else {
                names.join(", ")
            },
            track.background_color
        );
    }
    Ok(())
}

fn cmd_render(
    config: &Path,
    output: Option<&Path>,
    paths: &[PathBuf],
    policy: MissingValuePolicy,
) -> AppResult<()> {
    let mut session = load_session(paths, policy)?;
    let (selection, tracks) = wl_app::load_configuration(config)?;
    session.replace_layout(selection, tracks);

    let figures = wl_app::render_session(&session);
    if figures.is_empty() {
        tracing::warn!("no selected well is loaded; nothing to render");
    }

    let text = serde_json::to_string_pretty(&figures)
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize figures: {}", e)))?;

    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("✓ Wrote {} figure(s) to {}", figures.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}
