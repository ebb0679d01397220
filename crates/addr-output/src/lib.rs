//! Output generation for normalized addresses.
//!
//! - **OSM XML**: upload-ready nodes with `addr:*` tags
//! - **JSON report**: counters and diagnostics of a run

mod common;
mod osm_xml;
mod report_json;

pub use common::{DEFAULT_GENERATOR, OSM_API_VERSION};
pub use osm_xml::{OsmXmlOptions, write_osm_xml, write_osm_xml_file};
pub use report_json::write_report_json;
