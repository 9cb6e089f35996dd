//! Application-Layer: Controller, State, Events, Edit-Commands und History.

pub mod commands;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Editor-Sitzung (Trajektorie,
/// History, Begrenzungen, Selektion).
pub mod state;

pub use commands::EditCommand;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, DEFAULT_MAX_HISTORY};
pub use state::AppState;
