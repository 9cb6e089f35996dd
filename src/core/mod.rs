//! Core-Domänentypen: Trajektorienpunkte, Trajektorie, Streckenbegrenzungen.

pub mod bounds;
pub mod error;
/// Core-Datenmodelle für Trajektorien
///
/// - TrajectoryPoint: Einzelner Wegpunkt mit Position und Geschwindigkeit
/// - TrajectoryRecord: Punkt plus durchgereichte Zusatzspalten
/// - Trajectory: Geordnete Punktfolge mit CSV-Abbildung
pub mod point;
pub mod track_boundaries;
pub mod trajectory;

pub use bounds::{Bounds2D, VelocityRange};
pub use error::TrajectoryError;
pub use point::{ExtraColumns, TrajectoryPoint, TrajectoryRecord, EXTRA_COLUMN_COUNT};
pub use track_boundaries::{BoundaryLayout, BoundaryPoint, TrackBoundaries};
pub use trajectory::{Trajectory, PLAIN_HEADER};
