pub mod error;
pub mod osm_reader;

pub use error::IngestError;
pub use osm_reader::{read_osm, read_osm_file, read_osm_str};
