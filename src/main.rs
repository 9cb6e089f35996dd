//! Trajectory Editor: Kommandozeilen-Frontend.
//!
//! Lädt, inspiziert und bearbeitet Trajektorien-CSV-Dateien ohne GUI und
//! konvertiert Lanelet2-Karten in Begrenzungsdateien.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use trajectory_editor::osm::{combine_lanelets, write_boundaries_csv, OsmDocument};
use trajectory_editor::{
    kmh_to_ms, ms_to_kmh, AppController, AppIntent, AppState, Bounds2D, EditorOptions,
    TrackBoundaries, VelocityRange,
};

#[derive(Parser, Debug)]
#[command(name = "trajectory-editor", version)]
#[command(about = "Trajektorien-CSV laden, prüfen und bearbeiten")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optionen-Datei (Standard: trajectory_editor.toml neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Zusammenfassung einer Trajektorie ausgeben
    Info {
        /// Trajektorien-CSV
        input: PathBuf,

        /// Ausgabe als JSON
        #[arg(long)]
        json: bool,
    },
    /// Geschwindigkeit eines Punktbereichs setzen
    SetVelocity {
        /// Trajektorien-CSV
        input: PathBuf,

        /// Erster Index (inklusive)
        #[arg(long)]
        start: usize,

        /// Letzter Index (inklusive)
        #[arg(long)]
        end: usize,

        /// Neue Geschwindigkeit in km/h
        #[arg(long)]
        kmh: f64,

        /// Zieldatei (Standard: Eingabedatei überschreiben)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Begrenzungs-CSV laden und erkanntes Layout ausgeben
    Boundaries {
        /// Begrenzungs-CSV
        input: PathBuf,
    },
    /// Lanelet2-OSM in eine 6-Spalten-Begrenzungs-CSV umwandeln
    OsmToCsv {
        /// OSM-Datei
        input: PathBuf,

        /// Ziel-CSV
        output: PathBuf,
    },
}

/// JSON-Zusammenfassung für `info --json`.
#[derive(Serialize)]
struct TrajectorySummary {
    points: usize,
    extended: bool,
    bounds: Bounds2D,
    velocity_ms: VelocityRange,
}

fn main() -> Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Trajectory Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let cli = Cli::parse();
        let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
        let options = EditorOptions::load_from_file(&config_path);

        match cli.command {
            Commands::Info { input, json } => Self::info(options, input, json),
            Commands::SetVelocity {
                input,
                start,
                end,
                kmh,
                output,
            } => Self::set_velocity(options, input, start, end, kmh, output),
            Commands::Boundaries { input } => Self::boundaries(options, input),
            Commands::OsmToCsv { input, output } => Self::osm_to_csv(input, output),
        }
    }

    fn load(options: EditorOptions, input: PathBuf) -> Result<(AppController, AppState)> {
        let mut controller = AppController::new();
        let mut state = AppState::with_options(options);
        controller.handle_intent(&mut state, AppIntent::FileSelected { path: input })?;
        Ok((controller, state))
    }

    fn info(options: EditorOptions, input: PathBuf, json: bool) -> Result<()> {
        let (_, state) = Self::load(options, input)?;
        let trajectory = &state.trajectory;
        let summary = TrajectorySummary {
            points: trajectory.len(),
            extended: trajectory.is_extended(),
            bounds: trajectory.bounds(),
            velocity_ms: trajectory.velocity_range(),
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        println!(
            "Punkte: {} ({})",
            summary.points,
            if summary.extended { "8 Spalten" } else { "4 Spalten" }
        );
        println!(
            "Bereich: x {:.2}..{:.2}, y {:.2}..{:.2}",
            summary.bounds.min.x, summary.bounds.max.x, summary.bounds.min.y, summary.bounds.max.y
        );
        println!(
            "Geschwindigkeit: {:.2}..{:.2} km/h",
            ms_to_kmh(summary.velocity_ms.min),
            ms_to_kmh(summary.velocity_ms.max)
        );
        Ok(())
    }

    fn set_velocity(
        options: EditorOptions,
        input: PathBuf,
        start: usize,
        end: usize,
        kmh: f64,
        output: Option<PathBuf>,
    ) -> Result<()> {
        let (mut controller, mut state) = Self::load(options, input)?;

        controller.handle_intent(
            &mut state,
            AppIntent::RangeVelocityChangeRequested {
                start,
                end,
                velocity: kmh_to_ms(kmh),
            },
        )?;
        if !state.dirty {
            bail!(
                "{}",
                state
                    .status_message
                    .unwrap_or_else(|| "Keine Änderung".to_string())
            );
        }

        let save = match output {
            Some(path) => AppIntent::SaveFilePathSelected { path },
            None => AppIntent::SaveRequested,
        };
        controller.handle_intent(&mut state, save)?;

        println!("Punkte {}-{} auf {:.1} km/h gesetzt", start, end, kmh);
        Ok(())
    }

    fn boundaries(options: EditorOptions, input: PathBuf) -> Result<()> {
        let mut boundaries = TrackBoundaries::new();
        let layout = boundaries.load_from_csv(&input, &options.csv_options())?;
        let bounds = boundaries.bounds();

        println!("Layout: {:?}", layout);
        println!(
            "Links: {} Punkte, Rechts: {} Punkte",
            boundaries.left().len(),
            boundaries.right().len()
        );
        println!(
            "Bereich: x {:.2}..{:.2}, y {:.2}..{:.2}",
            bounds.min.x, bounds.max.x, bounds.min.y, bounds.max.y
        );
        Ok(())
    }

    fn osm_to_csv(input: PathBuf, output: PathBuf) -> Result<()> {
        let document = OsmDocument::load_from_file(&input)?;
        let lanelets = document.extract_lanelet_boundaries();
        if lanelets.is_empty() {
            bail!("Keine Lanelet-Begrenzungen in {} gefunden", input.display());
        }

        let boundaries = combine_lanelets(&lanelets);
        write_boundaries_csv(&output, &boundaries)
            .with_context(|| format!("Export nach {} fehlgeschlagen", output.display()))?;

        println!(
            "{} Lanelets, links {} / rechts {} Punkte → {}",
            lanelets.len(),
            boundaries.left().len(),
            boundaries.right().len(),
            output.display()
        );
        Ok(())
    }
}
