//! Einheitenumrechnung für Frontends (Eingabe in km/h, gespeichert in m/s).

const KMH_PER_MS: f64 = 3.6;

/// km/h → m/s
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / KMH_PER_MS
}

/// m/s → km/h
pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * KMH_PER_MS
}
