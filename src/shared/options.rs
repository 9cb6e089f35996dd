//! Zentrale Konfiguration für den Trajectory Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::csv::CsvOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const MAX_HISTORY: usize = crate::app::history::DEFAULT_MAX_HISTORY;

// ── Editing ─────────────────────────────────────────────────────────

/// Unter dieser Punktzahl wird Löschen abgelehnt.
pub const MIN_POINTS_FOR_DELETE: usize = 2;
/// Geschwindigkeitsänderungen bis zu diesem Betrag (m/s) werden ignoriert.
pub const VELOCITY_CHANGE_EPSILON: f64 = 0.01;
/// z-Koordinate neu hinzugefügter Punkte (Eingabe ist nur 2D).
pub const NEW_POINT_Z: f64 = 0.0;

/// Dateiname der Optionen-Datei.
const CONFIG_FILE_NAME: &str = "trajectory_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `trajectory_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    // ── CSV ─────────────────────────────────────────────────────
    /// Erste Zeile jeder CSV-Datei ist eine Kopfzeile
    #[serde(default = "default_csv_has_header")]
    pub csv_has_header: bool,

    // ── Editing ─────────────────────────────────────────────────
    /// Löschen wird abgelehnt, wenn die Trajektorie höchstens so viele Punkte hat
    #[serde(default = "default_min_points_for_delete")]
    pub min_points_for_delete: usize,
    /// Schwelle für Einzelpunkt-Geschwindigkeitsänderungen (m/s)
    #[serde(default = "default_velocity_change_epsilon")]
    pub velocity_change_epsilon: f64,
    /// z für neu hinzugefügte Punkte
    #[serde(default)]
    pub new_point_z: f64,

    // ── Streckenbegrenzungen ────────────────────────────────────
    /// Begrenzungs-CSV, die beim Laden einer Trajektorie mitgeladen wird
    #[serde(default)]
    pub boundaries_path: Option<PathBuf>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_history: MAX_HISTORY,
            csv_has_header: true,
            min_points_for_delete: MIN_POINTS_FOR_DELETE,
            velocity_change_epsilon: VELOCITY_CHANGE_EPSILON,
            new_point_z: NEW_POINT_Z,
            boundaries_path: None,
        }
    }
}

fn default_max_history() -> usize {
    MAX_HISTORY
}

fn default_csv_has_header() -> bool {
    true
}

fn default_min_points_for_delete() -> usize {
    MIN_POINTS_FOR_DELETE
}

fn default_velocity_change_epsilon() -> f64 {
    VELOCITY_CHANGE_EPSILON
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("trajectory_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// CSV-Einstellungen für Laden und Speichern.
    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            has_header: self.csv_has_header,
        }
    }
}
