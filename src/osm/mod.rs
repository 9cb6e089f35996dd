//! Import von Lanelet2-Karten (OSM-XML) als Streckenbegrenzungen.
//!
//! Relevant sind nur lokale Koordinaten (`local_x`, `local_y`, `ele`) der
//! Nodes, die Node-Folgen der Ways und `type=lanelet`-Relationen mit ihren
//! `left`/`right`-Mitgliedern.

mod export;
mod parser;

pub use export::{boundaries_to_rows, combine_lanelets, write_boundaries_csv, BOUNDARY_HEADER};

use std::collections::{BTreeMap, HashMap};

/// Node mit lokalen Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OsmNode {
    pub id: i64,
    pub local_x: f64,
    pub local_y: f64,
    /// Höhe (`ele`), 0.0 wenn nicht angegeben
    pub elevation: f64,
}

/// Way: geordnete Folge von Node-Referenzen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OsmWay {
    pub id: i64,
    pub node_refs: Vec<i64>,
    pub tags: HashMap<String, String>,
}

/// Mitglied einer Relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsmMember {
    pub role: String,
    pub reference: i64,
}

/// Relation mit Rollen-Mitgliedern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OsmRelation {
    pub id: i64,
    pub members: Vec<OsmMember>,
    pub tags: HashMap<String, String>,
}

/// Ein Fahrstreifen mit linkem und rechtem Rand.
#[derive(Debug, Clone, PartialEq)]
pub struct Lanelet {
    pub relation_id: i64,
    pub left: Vec<OsmNode>,
    pub right: Vec<OsmNode>,
}

/// Geparste OSM-Datei.
#[derive(Debug, Clone, Default)]
pub struct OsmDocument {
    pub nodes: HashMap<i64, OsmNode>,
    pub ways: HashMap<i64, OsmWay>,
    /// Nach ID sortiert, damit die Lanelet-Reihenfolge stabil ist
    pub relations: BTreeMap<i64, OsmRelation>,
}

impl OsmDocument {
    /// Extrahiert alle Lanelets, bei denen beide Ränder Punkte haben.
    ///
    /// Node-Referenzen ohne bekannten Node werden übersprungen.
    pub fn extract_lanelet_boundaries(&self) -> Vec<Lanelet> {
        let lanelets: Vec<Lanelet> = self
            .relations
            .values()
            .filter(|r| r.tags.get("type").map(String::as_str) == Some("lanelet"))
            .filter_map(|relation| {
                let mut left = Vec::new();
                let mut right = Vec::new();
                for member in &relation.members {
                    let Some(way) = self.ways.get(&member.reference) else {
                        continue;
                    };
                    let nodes: Vec<OsmNode> = way
                        .node_refs
                        .iter()
                        .filter_map(|id| self.nodes.get(id).copied())
                        .collect();
                    match member.role.as_str() {
                        "left" => left = nodes,
                        "right" => right = nodes,
                        _ => {}
                    }
                }
                (!left.is_empty() && !right.is_empty()).then_some(Lanelet {
                    relation_id: relation.id,
                    left,
                    right,
                })
            })
            .collect();

        log::info!("{} Lanelet-Begrenzungen gefunden", lanelets.len());
        lanelets
    }
}
