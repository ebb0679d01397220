//! OSM XML output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use addr_model::NormalizedRecord;

use crate::common::{DEFAULT_GENERATOR, OSM_API_VERSION, ensure_parent_dir, write_tag};

/// Options for OSM XML output.
#[derive(Debug, Clone)]
pub struct OsmXmlOptions {
    pub generator: String,
}

impl OsmXmlOptions {
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
        }
    }
}

impl Default for OsmXmlOptions {
    fn default() -> Self {
        Self::new(DEFAULT_GENERATOR)
    }
}

/// Write normalized nodes as an OSM document to `output_path`.
pub fn write_osm_xml_file(
    output_path: &Path,
    records: &[NormalizedRecord],
    options: &OsmXmlOptions,
) -> Result<()> {
    ensure_parent_dir(output_path)?;
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    write_osm_xml(&mut writer, records, options)?;
    writer
        .flush()
        .with_context(|| format!("flush {}", output_path.display()))?;
    Ok(())
}

/// Write normalized nodes as an OSM document.
pub fn write_osm_xml<W: Write>(
    output: W,
    records: &[NormalizedRecord],
    options: &OsmXmlOptions,
) -> Result<()> {
    let mut xml = Writer::new_with_indent(output, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("osm");
    root.push_attribute(("version", OSM_API_VERSION));
    root.push_attribute(("upload", "true"));
    root.push_attribute(("generator", options.generator.as_str()));
    xml.write_event(Event::Start(root))?;

    for record in records {
        let id = record.id.to_string();
        let mut node = BytesStart::new("node");
        node.push_attribute(("id", id.as_str()));
        node.push_attribute(("lat", record.position.lat()));
        node.push_attribute(("lon", record.position.lon()));
        node.push_attribute(("visible", "true"));
        xml.write_event(Event::Start(node))?;
        for (key, value) in record.tags() {
            write_tag(&mut xml, key, value)?;
        }
        xml.write_event(Event::End(BytesEnd::new("node")))?;
    }

    xml.write_event(Event::End(BytesEnd::new("osm")))?;
    xml.get_mut().write_all(b"\n")?;
    Ok(())
}
