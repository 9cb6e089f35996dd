//! Edit-Commands: unveränderliche Wertobjekte, je eine Variante pro Operation.
//!
//! Ein Command speichert alte und neue Werte, nie eine Referenz auf die
//! Trajektorie. `apply` führt die Operation aus, `invert` macht sie rückgängig.
//! Passt ein Command nicht (mehr) zum Stand der Trajektorie, schlägt er mit
//! `TrajectoryError` fehl statt zu klemmen.

use crate::core::{Trajectory, TrajectoryError, TrajectoryPoint, TrajectoryRecord};

/// Eine rückgängig machbare Bearbeitung der Trajektorie.
#[derive(Debug, Clone, PartialEq)]
pub enum EditCommand {
    /// Punkt in der Ebene verschieben
    MovePoint {
        index: usize,
        old_x: f64,
        old_y: f64,
        new_x: f64,
        new_y: f64,
    },
    /// Punkt an `index` einfügen
    AddPoint {
        index: usize,
        point: TrajectoryPoint,
    },
    /// Punkt an `index` entfernen; `record` ist der entfernte Datensatz
    RemovePoint {
        index: usize,
        record: TrajectoryRecord,
    },
    /// Geschwindigkeit eines Punkts ändern
    ChangeVelocity {
        index: usize,
        old_velocity: f64,
        new_velocity: f64,
    },
    /// Geschwindigkeit aller Punkte in `start..=end` auf einen Wert setzen
    ChangeRangeVelocity {
        start: usize,
        end: usize,
        /// Ursprüngliche Werte, einer pro Index in `start..=end`
        old_velocities: Vec<f64>,
        new_velocity: f64,
    },
}

impl EditCommand {
    // ── Konstruktoren mit Ausgangswerten aus der Trajektorie ────────

    /// Verschieben, alte Position aus der Trajektorie.
    pub fn move_point_from(
        trajectory: &Trajectory,
        index: usize,
        new_x: f64,
        new_y: f64,
    ) -> Result<Self, TrajectoryError> {
        let point = point_at(trajectory, index)?;
        Ok(Self::MovePoint {
            index,
            old_x: point.x,
            old_y: point.y,
            new_x,
            new_y,
        })
    }

    /// Entfernen, der komplette Datensatz wird für Undo mitgenommen.
    pub fn remove_point_from(
        trajectory: &Trajectory,
        index: usize,
    ) -> Result<Self, TrajectoryError> {
        let record = trajectory
            .record(index)
            .ok_or(TrajectoryError::IndexOutOfRange {
                index,
                len: trajectory.len(),
            })?;
        Ok(Self::RemovePoint {
            index,
            record: record.clone(),
        })
    }

    /// Geschwindigkeit ändern, alter Wert aus der Trajektorie.
    pub fn change_velocity_from(
        trajectory: &Trajectory,
        index: usize,
        new_velocity: f64,
    ) -> Result<Self, TrajectoryError> {
        let point = point_at(trajectory, index)?;
        Ok(Self::ChangeVelocity {
            index,
            old_velocity: point.velocity,
            new_velocity,
        })
    }

    /// Bereichsänderung, alte Werte aus `start..=end`.
    pub fn change_range_velocity_from(
        trajectory: &Trajectory,
        start: usize,
        end: usize,
        new_velocity: f64,
    ) -> Result<Self, TrajectoryError> {
        let len = trajectory.len();
        if start > end || end >= len {
            return Err(TrajectoryError::InvalidRange { start, end, len });
        }
        let old_velocities = trajectory
            .points()
            .skip(start)
            .take(end - start + 1)
            .map(|p| p.velocity)
            .collect();
        Ok(Self::ChangeRangeVelocity {
            start,
            end,
            old_velocities,
            new_velocity,
        })
    }

    // ── Ausführung ──────────────────────────────────────────────────

    /// Führt die Operation auf der Trajektorie aus.
    pub fn apply(&self, trajectory: &mut Trajectory) -> Result<(), TrajectoryError> {
        match self {
            Self::MovePoint {
                index,
                new_x,
                new_y,
                ..
            } => trajectory.move_to(*index, *new_x, *new_y),
            Self::AddPoint { index, point } => trajectory.insert(*index, *point),
            Self::RemovePoint { index, .. } => trajectory.remove_at(*index).map(|_| ()),
            Self::ChangeVelocity {
                index,
                new_velocity,
                ..
            } => trajectory.set_velocity(*index, *new_velocity),
            Self::ChangeRangeVelocity {
                start,
                end,
                new_velocity,
                ..
            } => trajectory.set_velocity_range(*start, *end, *new_velocity),
        }
    }

    /// Macht die Operation rückgängig.
    pub fn invert(&self, trajectory: &mut Trajectory) -> Result<(), TrajectoryError> {
        match self {
            Self::MovePoint {
                index,
                old_x,
                old_y,
                ..
            } => trajectory.move_to(*index, *old_x, *old_y),
            Self::AddPoint { index, .. } => trajectory.remove_at(*index).map(|_| ()),
            Self::RemovePoint { index, record } => trajectory.insert_record(*index, record.clone()),
            Self::ChangeVelocity {
                index,
                old_velocity,
                ..
            } => trajectory.set_velocity(*index, *old_velocity),
            Self::ChangeRangeVelocity {
                start,
                end,
                old_velocities,
                ..
            } => {
                let expected = end
                    .checked_sub(*start)
                    .and_then(|span| span.checked_add(1))
                    .unwrap_or(0);
                if expected == 0 || old_velocities.len() != expected {
                    return Err(TrajectoryError::RangeValueMismatch {
                        start: *start,
                        end: *end,
                        expected,
                        actual: old_velocities.len(),
                    });
                }
                trajectory.set_velocities(*start, old_velocities)
            }
        }
    }

    /// Kurzbeschreibung für Undo/Redo-Anzeigen.
    pub fn description(&self) -> String {
        match self {
            Self::MovePoint { index, .. } => format!("Move point {index}"),
            Self::AddPoint { index, .. } => format!("Add point at {index}"),
            Self::RemovePoint { index, .. } => format!("Remove point {index}"),
            Self::ChangeVelocity { index, .. } => format!("Change velocity of point {index}"),
            Self::ChangeRangeVelocity { start, end, .. } => {
                format!("Change velocity range {start}-{end}")
            }
        }
    }
}

fn point_at(trajectory: &Trajectory, index: usize) -> Result<&TrajectoryPoint, TrajectoryError> {
    trajectory
        .point(index)
        .ok_or(TrajectoryError::IndexOutOfRange {
            index,
            len: trajectory.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(count: usize) -> Trajectory {
        Trajectory::from_points(
            (0..count).map(|i| TrajectoryPoint::new(i as f64, 0.0, 0.0, 10.0 + i as f64)),
        )
    }

    #[test]
    fn move_point_apply_then_invert_restores_position() {
        let mut trajectory = line(3);
        let command = EditCommand::move_point_from(&trajectory, 1, 1.5, 2.5).unwrap();

        command.apply(&mut trajectory).unwrap();
        assert_eq!(trajectory.point(1).unwrap().position_2d(), glam::DVec2::new(1.5, 2.5));

        command.invert(&mut trajectory).unwrap();
        assert_eq!(*trajectory.point(1).unwrap(), TrajectoryPoint::new(1.0, 0.0, 0.0, 11.0));
    }

    #[test]
    fn add_point_invert_removes_at_same_index() {
        let mut trajectory = line(2);
        let command = EditCommand::AddPoint {
            index: 1,
            point: TrajectoryPoint::new(0.5, 0.5, 0.0, 3.0),
        };

        command.apply(&mut trajectory).unwrap();
        assert_eq!(trajectory.len(), 3);
        assert_eq!(trajectory.point(1).unwrap().velocity, 3.0);

        command.invert(&mut trajectory).unwrap();
        assert_eq!(trajectory.to_points(), line(2).to_points());
    }

    #[test]
    fn add_point_past_end_fails_loudly() {
        let mut trajectory = line(2);
        let command = EditCommand::AddPoint {
            index: 5,
            point: TrajectoryPoint::default(),
        };
        assert_eq!(
            command.apply(&mut trajectory),
            Err(TrajectoryError::InsertOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn remove_point_invert_restores_extra_columns() {
        let mut trajectory = Trajectory::new();
        let extra = ["0", "0", "0.7", "0.7"].map(String::from);
        trajectory
            .insert_record(
                0,
                TrajectoryRecord::extended(TrajectoryPoint::new(1.0, 2.0, 3.0, 4.0), extra.clone()),
            )
            .unwrap();
        trajectory.push(TrajectoryPoint::default());

        let command = EditCommand::remove_point_from(&trajectory, 0).unwrap();
        command.apply(&mut trajectory).unwrap();
        assert_eq!(trajectory.len(), 1);

        command.invert(&mut trajectory).unwrap();
        assert_eq!(trajectory.record(0).unwrap().extra_columns.as_ref(), Some(&extra));
    }

    #[test]
    fn remove_point_from_invalid_index_fails() {
        let trajectory = line(2);
        assert!(EditCommand::remove_point_from(&trajectory, 2).is_err());
    }

    #[test]
    fn change_velocity_roundtrip() {
        let mut trajectory = line(3);
        let command = EditCommand::change_velocity_from(&trajectory, 2, 99.0).unwrap();

        command.apply(&mut trajectory).unwrap();
        assert_eq!(trajectory.point(2).unwrap().velocity, 99.0);
        command.invert(&mut trajectory).unwrap();
        assert_eq!(trajectory.point(2).unwrap().velocity, 12.0);
    }

    #[test]
    fn change_range_velocity_invert_restores_individual_values() {
        let mut trajectory = line(5);
        let command = EditCommand::change_range_velocity_from(&trajectory, 1, 3, 1.0).unwrap();

        command.apply(&mut trajectory).unwrap();
        let applied: Vec<f64> = trajectory.points().map(|p| p.velocity).collect();
        assert_eq!(applied, vec![10.0, 1.0, 1.0, 1.0, 14.0]);

        command.invert(&mut trajectory).unwrap();
        let restored: Vec<f64> = trajectory.points().map(|p| p.velocity).collect();
        assert_eq!(restored, vec![10.0, 11.0, 12.0, 13.0, 14.0]);
    }

    #[test]
    fn change_range_velocity_from_rejects_invalid_range() {
        let trajectory = line(3);
        assert!(EditCommand::change_range_velocity_from(&trajectory, 2, 1, 0.0).is_err());
        assert!(EditCommand::change_range_velocity_from(&trajectory, 0, 3, 0.0).is_err());
    }

    #[test]
    fn change_range_velocity_with_wrong_value_count_fails_on_invert() {
        let mut trajectory = line(4);
        let command = EditCommand::ChangeRangeVelocity {
            start: 0,
            end: 2,
            old_velocities: vec![1.0],
            new_velocity: 0.0,
        };
        let err = command.invert(&mut trajectory).unwrap_err();
        assert!(matches!(err, TrajectoryError::RangeValueMismatch { expected: 3, actual: 1, .. }));
        assert_eq!(trajectory.point(0).unwrap().velocity, 10.0);
    }

    #[test]
    fn change_range_velocity_with_huge_end_fails_without_overflow() {
        let mut trajectory = line(2);
        let command = EditCommand::ChangeRangeVelocity {
            start: 0,
            end: usize::MAX,
            old_velocities: vec![1.0, 2.0],
            new_velocity: 0.0,
        };
        let err = command.invert(&mut trajectory).unwrap_err();
        assert!(matches!(
            err,
            TrajectoryError::RangeValueMismatch { end: usize::MAX, actual: 2, .. }
        ));
        assert_eq!(trajectory.point(1).unwrap().velocity, 11.0);
    }

    #[test]
    fn descriptions_name_operation_and_index() {
        let trajectory = line(3);
        assert_eq!(
            EditCommand::move_point_from(&trajectory, 0, 0.0, 0.0)
                .unwrap()
                .description(),
            "Move point 0"
        );
        assert_eq!(
            EditCommand::change_range_velocity_from(&trajectory, 0, 2, 1.0)
                .unwrap()
                .description(),
            "Change velocity range 0-2"
        );
    }
}
