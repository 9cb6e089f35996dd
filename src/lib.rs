//! Trajectory Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod csv;
pub mod osm;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditCommand, EditHistory};
pub use crate::core::{
    BoundaryLayout, BoundaryPoint, Bounds2D, TrackBoundaries, Trajectory, TrajectoryError,
    TrajectoryPoint, TrajectoryRecord, VelocityRange,
};
pub use csv::{parse_csv_str, read_csv_file, write_csv_file, CsvOptions, CsvRow, CsvTable};
pub use osm::{Lanelet, OsmDocument};
pub use shared::{kmh_to_ms, ms_to_kmh, EditorOptions};
