//! Shared helpers for output generation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};
use std::io::Write;

/// OSM API version written on the root element.
pub const OSM_API_VERSION: &str = "0.6";

/// Default value of the root `generator` attribute.
pub const DEFAULT_GENERATOR: &str = "osm-addr";

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write an empty `<tag k=".." v=".."/>` element.
pub fn write_tag<W: Write>(writer: &mut Writer<W>, key: &str, value: &str) -> Result<()> {
    let mut tag = BytesStart::new("tag");
    tag.push_attribute(("k", key));
    tag.push_attribute(("v", value));
    writer.write_event(Event::Empty(tag))?;
    Ok(())
}
