//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Hilfen, die von `app`, CLI und Frontends gemeinsam
//! genutzt werden.

pub mod options;
pub mod units;

pub use options::EditorOptions;
pub use units::{kmh_to_ms, ms_to_kmh};
