//! Library components of the `osm-addr` command line tool.

pub mod logging;
pub mod pipeline;
