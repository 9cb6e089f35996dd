//! Parser für OSM-XML (Lanelet2).

use super::{OsmDocument, OsmMember, OsmNode, OsmRelation, OsmWay};
use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::path::Path;

/// Element, dessen Kinder (`tag`, `nd`, `member`) gerade gesammelt werden.
enum OpenElement {
    Node { id: i64, tags: HashMap<String, String> },
    Way(OsmWay),
    Relation(OsmRelation),
}

impl OsmDocument {
    /// Liest und parsed eine OSM-Datei.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("OSM-Datei nicht lesbar: {}", path.display()))?;
        let document = Self::parse(&content)
            .with_context(|| format!("Fehler beim Parsen von {}", path.display()))?;
        log::info!(
            "Loaded OSM: {} nodes, {} ways, {} relations",
            document.nodes.len(),
            document.ways.len(),
            document.relations.len()
        );
        Ok(document)
    }

    /// Parsed eine OSM-Datei aus einem XML-String.
    ///
    /// Unvollständige Elemente (fehlende ID, Node ohne lokale Koordinaten,
    /// Way ohne Node-Referenzen) werden übersprungen.
    pub fn parse(xml_content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml_content);
        reader.config_mut().trim_text(true);

        let mut buffer = Vec::new();
        let mut document = Self::default();
        let mut open: Option<OpenElement> = None;

        loop {
            match reader.read_event_into(&mut buffer) {
                Ok(Event::Start(ref e)) => {
                    let attrs = read_attributes(&reader, e)?;
                    match e.name().as_ref() {
                        b"node" | b"way" | b"relation" => {
                            open = begin_element(e.name().as_ref(), &attrs);
                        }
                        _ => add_child(&mut open, e.name().as_ref(), &attrs),
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    let attrs = read_attributes(&reader, e)?;
                    match e.name().as_ref() {
                        b"node" | b"way" | b"relation" => {
                            if let Some(element) = begin_element(e.name().as_ref(), &attrs) {
                                document.finish(element);
                            }
                        }
                        _ => add_child(&mut open, e.name().as_ref(), &attrs),
                    }
                }
                Ok(Event::End(ref e)) => {
                    if matches!(e.name().as_ref(), b"node" | b"way" | b"relation") {
                        if let Some(element) = open.take() {
                            document.finish(element);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
                _ => {}
            }

            buffer.clear();
        }

        Ok(document)
    }

    fn finish(&mut self, element: OpenElement) {
        match element {
            OpenElement::Node { id, tags } => {
                let coord = |key: &str| tags.get(key).and_then(|v| v.parse::<f64>().ok());
                match (coord("local_x"), coord("local_y")) {
                    (Some(local_x), Some(local_y)) => {
                        let elevation = coord("ele").unwrap_or(0.0);
                        self.nodes.insert(
                            id,
                            OsmNode {
                                id,
                                local_x,
                                local_y,
                                elevation,
                            },
                        );
                    }
                    _ => log::debug!("Node {} ohne lokale Koordinaten übersprungen", id),
                }
            }
            OpenElement::Way(way) => {
                if !way.node_refs.is_empty() {
                    self.ways.insert(way.id, way);
                }
            }
            OpenElement::Relation(relation) => {
                self.relations.insert(relation.id, relation);
            }
        }
    }
}

fn read_attributes(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<HashMap<String, String>> {
    let mut attrs = HashMap::new();
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();
        let value = attr.unescape_value()?.into_owned();
        attrs.insert(key, value);
    }
    Ok(attrs)
}

fn begin_element(tag: &[u8], attrs: &HashMap<String, String>) -> Option<OpenElement> {
    let Some(id) = attrs.get("id").and_then(|v| v.parse::<i64>().ok()) else {
        log::debug!(
            "<{}> ohne gültige ID übersprungen",
            String::from_utf8_lossy(tag)
        );
        return None;
    };
    match tag {
        b"node" => Some(OpenElement::Node {
            id,
            tags: HashMap::new(),
        }),
        b"way" => Some(OpenElement::Way(OsmWay {
            id,
            ..OsmWay::default()
        })),
        b"relation" => Some(OpenElement::Relation(OsmRelation {
            id,
            ..OsmRelation::default()
        })),
        _ => None,
    }
}

fn add_child(open: &mut Option<OpenElement>, tag: &[u8], attrs: &HashMap<String, String>) {
    let Some(element) = open.as_mut() else {
        return;
    };
    match (tag, element) {
        (b"tag", element) => {
            let (Some(k), Some(v)) = (attrs.get("k"), attrs.get("v")) else {
                return;
            };
            if k.is_empty() || v.is_empty() {
                return;
            }
            let tags = match element {
                OpenElement::Node { tags, .. } => tags,
                OpenElement::Way(way) => &mut way.tags,
                OpenElement::Relation(relation) => &mut relation.tags,
            };
            tags.insert(k.clone(), v.clone());
        }
        (b"nd", OpenElement::Way(way)) => {
            if let Some(reference) = attrs.get("ref").and_then(|v| v.parse::<i64>().ok()) {
                way.node_refs.push(reference);
            }
        }
        (b"member", OpenElement::Relation(relation)) => {
            let role = attrs.get("role").filter(|r| !r.is_empty());
            let reference = attrs.get("ref").and_then(|v| v.parse::<i64>().ok());
            if let (Some(role), Some(reference)) = (role, reference) {
                relation.members.push(OsmMember {
                    role: role.clone(),
                    reference,
                });
            }
        }
        _ => {}
    }
}
