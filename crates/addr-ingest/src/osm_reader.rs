//! OSM XML reader.
//!
//! Reads `<node>` children of the `<osm>` root together with their `<tag>`
//! children. Other top-level elements (`<bounds>`, `<way>`, ...) are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use addr_model::{Position, RawRecord};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info};

use crate::error::IngestError;

const ROOT: &[u8] = b"osm";
const NODE: &[u8] = b"node";
const TAG: &[u8] = b"tag";

/// Read all nodes from an OSM XML file.
pub fn read_osm_file(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_osm(BufReader::new(file))?;
    info!(path = %path.display(), record_count = records.len(), "read OSM input");
    Ok(records)
}

pub fn read_osm_str(text: &str) -> Result<Vec<RawRecord>, IngestError> {
    read_osm(text.as_bytes())
}

/// Read all nodes, in document order.
pub fn read_osm<R: BufRead>(input: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut xml = Reader::from_reader(input);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut ignored = 0usize;

    loop {
        let position = xml.buffer_position();
        match xml
            .read_event_into(&mut buf)
            .map_err(|source| IngestError::Xml { position, source })?
        {
            Event::Start(start) => {
                open_element(
                    &start,
                    depth,
                    position,
                    &mut saw_root,
                    &mut current,
                    &mut ignored,
                )?;
                depth += 1;
            }
            Event::Empty(start) => {
                open_element(
                    &start,
                    depth,
                    position,
                    &mut saw_root,
                    &mut current,
                    &mut ignored,
                )?;
                if depth == 1 {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let Some(record) = current.take() {
                        records.push(record);
                    }
                }
            }
            Event::Eof => {
                if !saw_root {
                    return Err(malformed(position, "document has no <osm> root"));
                }
                if depth != 0 {
                    return Err(malformed(position, "unexpected end of document"));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    if ignored > 0 {
        debug!(ignored, "ignored non-node elements");
    }
    Ok(records)
}

fn open_element(
    start: &BytesStart<'_>,
    depth: usize,
    position: u64,
    saw_root: &mut bool,
    current: &mut Option<RawRecord>,
    ignored: &mut usize,
) -> Result<(), IngestError> {
    let name = start.name();
    match depth {
        0 => {
            if name.as_ref() != ROOT || *saw_root {
                return Err(malformed(
                    position,
                    format!("expected <osm> root, found <{}>", lossy(name.as_ref())),
                ));
            }
            *saw_root = true;
        }
        1 if name.as_ref() == NODE => {
            *current = Some(read_node(start, position)?);
        }
        1 => *ignored += 1,
        2 if name.as_ref() == TAG => {
            if let Some(record) = current.as_mut() {
                let key = required_attribute(start, b"k", position)?;
                let value = required_attribute(start, b"v", position)?;
                if !record.insert_tag(key.as_str(), value) {
                    debug!(
                        node = record.source_id().unwrap_or(""),
                        key = %key,
                        "duplicate tag, keeping first value"
                    );
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn read_node(start: &BytesStart<'_>, position: u64) -> Result<RawRecord, IngestError> {
    let id = attribute(start, b"id", position)?;
    let node = id.clone().unwrap_or_else(|| format!("at byte {position}"));
    let lat = attribute(start, b"lat", position)?
        .ok_or_else(|| malformed(position, format!("node {node} has no lat")))?;
    let lon = attribute(start, b"lon", position)?
        .ok_or_else(|| malformed(position, format!("node {node} has no lon")))?;
    let coordinates = Position::new(lat, lon)
        .map_err(|source| IngestError::InvalidPosition { node, source })?;
    let record = RawRecord::new(coordinates);
    Ok(match id {
        Some(id) => record.with_source_id(id),
        None => record,
    })
}

fn attribute(
    start: &BytesStart<'_>,
    name: &[u8],
    position: u64,
) -> Result<Option<String>, IngestError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|source| IngestError::Xml {
            position,
            source: source.into(),
        })?;
        if attr.key.as_ref() == name {
            let value = attr.unescape_value().map_err(|source| IngestError::Xml {
                position,
                source: source.into(),
            })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn required_attribute(
    start: &BytesStart<'_>,
    name: &[u8],
    position: u64,
) -> Result<String, IngestError> {
    attribute(start, name, position)?.ok_or_else(|| {
        malformed(
            position,
            format!("<{}> without {} attribute", lossy(start.name().as_ref()), lossy(name)),
        )
    })
}

fn malformed(position: u64, message: impl Into<String>) -> IngestError {
    IngestError::Malformed {
        position,
        message: message.into(),
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
