use super::EditCommand;
use crate::core::{Trajectory, TrajectoryError};

/// Standard-Tiefe der Undo-History.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Lineare Undo/Redo-History mit Cursor.
///
/// `commands[..cursor]` sind rückgängig machbar, `commands[cursor..]`
/// wiederholbar. Jede Mutation der Trajektorie läuft über `execute`.
#[derive(Debug, Clone)]
pub struct EditHistory {
    commands: Vec<EditCommand>,
    cursor: usize,
    max_history: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(DEFAULT_MAX_HISTORY)
    }
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_history: usize) -> Self {
        Self {
            commands: Vec::with_capacity(max_history),
            cursor: 0,
            max_history,
        }
    }

    /// Führt einen Command aus und zeichnet ihn auf.
    ///
    /// Verwirft alle wiederholbaren Einträge. Schlägt `apply` fehl, bleibt die
    /// History unverändert.
    pub fn execute(
        &mut self,
        command: EditCommand,
        trajectory: &mut Trajectory,
    ) -> Result<(), TrajectoryError> {
        command.apply(trajectory)?;
        self.commands.truncate(self.cursor);
        self.commands.push(command);
        self.cursor = self.commands.len();
        self.trim();
        Ok(())
    }

    /// Macht den letzten Command rückgängig. `Ok(false)` wenn nichts zu tun ist.
    pub fn undo(&mut self, trajectory: &mut Trajectory) -> Result<bool, TrajectoryError> {
        if self.cursor == 0 {
            return Ok(false);
        }
        self.commands[self.cursor - 1].invert(trajectory)?;
        self.cursor -= 1;
        Ok(true)
    }

    /// Wiederholt den nächsten Command. `Ok(false)` wenn nichts zu tun ist.
    pub fn redo(&mut self, trajectory: &mut Trajectory) -> Result<bool, TrajectoryError> {
        if self.cursor == self.commands.len() {
            return Ok(false);
        }
        self.commands[self.cursor].apply(trajectory)?;
        self.cursor += 1;
        Ok(true)
    }

    /// Leert die History; die Trajektorie bleibt unberührt.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Beschreibung des nächsten Undo-Schritts.
    pub fn undo_description(&self) -> Option<String> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.commands.get(i))
            .map(EditCommand::description)
    }

    /// Beschreibung des nächsten Redo-Schritts.
    pub fn redo_description(&self) -> Option<String> {
        self.commands.get(self.cursor).map(EditCommand::description)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    /// Setzt die maximale Tiefe und kürzt ggf. sofort.
    pub fn set_max_history(&mut self, max_history: usize) {
        self.max_history = max_history;
        self.trim();
    }

    /// Kürzt auf `max_history`.
    ///
    /// Zuerst fallen die ältesten Undo-Einträge weg, erst danach das Ende der
    /// Redo-Einträge. Nicht angewendete Commands vor dem Cursor darf es nicht
    /// geben.
    fn trim(&mut self) {
        if self.commands.len() <= self.max_history {
            return;
        }
        let excess = self.commands.len() - self.max_history;
        let from_front = excess.min(self.cursor);
        self.commands.drain(..from_front);
        self.cursor -= from_front;
        self.commands.truncate(self.max_history);
    }
}
