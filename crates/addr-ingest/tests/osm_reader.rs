//! Tests for the OSM XML reader.

use std::fs;

use addr_ingest::{IngestError, read_osm_file, read_osm_str};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="county export">
  <bounds minlat="40.4" minlon="-86.2" maxlat="40.5" maxlon="-86.0"/>
  <node id="-1" lat="40.4864000" lon="-86.1336000">
    <tag k="HOUSE_NUMB" v="101"/>
    <tag k="DIR" v="N"/>
    <tag k="STREET" v="MAIN"/>
    <tag k="TYPE" v="ST"/>
    <tag k="ADDRESS_LA" v="101 N MAIN ST"/>
  </node>
  <node id="-2" lat="40.49" lon="-86.14"/>
  <node id="-3" lat="40.5" lon="-86.15">
    <tag k="STREET" v="O&apos;NEIL &amp; SONS"/>
    <tag k="STREET" v="SECOND"/>
    <tag k="STATUS" v=""/>
  </node>
</osm>
"#;

#[test]
fn reads_nodes_in_order() {
    let records = read_osm_str(SAMPLE).unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.source_id(), Some("-1"));
    assert_eq!(first.position().lat(), "40.4864000");
    assert_eq!(first.position().lon(), "-86.1336000");
    assert_eq!(first.tag("HOUSE_NUMB"), Some("101"));
    assert_eq!(first.tag("ADDRESS_LA"), Some("101 N MAIN ST"));

    assert_eq!(records[1].tags().count(), 0);
}

#[test]
fn unescapes_values_and_keeps_first_duplicate() {
    let records = read_osm_str(SAMPLE).unwrap();
    let third = &records[2];
    assert_eq!(third.tag("STREET"), Some("O'NEIL & SONS"));
    assert_eq!(third.tag("STATUS"), Some(""));
}

#[test]
fn empty_root_has_no_records() {
    assert!(read_osm_str("<osm/>").unwrap().is_empty());
    assert!(read_osm_str("<osm version=\"0.6\"></osm>").unwrap().is_empty());
}

#[test]
fn wrong_root_is_malformed() {
    let err = read_osm_str("<gpx><node lat=\"1\" lon=\"2\"/></gpx>").unwrap_err();
    assert!(matches!(err, IngestError::Malformed { .. }));
}

#[test]
fn empty_document_is_malformed() {
    let err = read_osm_str("").unwrap_err();
    assert!(matches!(err, IngestError::Malformed { .. }));
}

#[test]
fn node_without_lon_is_malformed() {
    let err = read_osm_str("<osm><node id=\"7\" lat=\"1.0\"/></osm>").unwrap_err();
    assert!(err.to_string().contains("node 7 has no lon"));
}

#[test]
fn malformed_error_points_into_the_document() {
    let text = "<osm>\n  <node id=\"9\" lat=\"40.1\"/>\n</osm>";
    let (position, message) = match read_osm_str(text).unwrap_err() {
        IngestError::Malformed { position, message } => (position, message),
        other => panic!("expected a malformed error, got {other:?}"),
    };
    assert!(position > 0 && position < text.len() as u64, "{position}");
    assert!(message.contains("node 9 has no lon"), "{message}");
}

#[test]
fn unparsable_coordinates_are_rejected() {
    let err = read_osm_str("<osm><node id=\"7\" lat=\"north\" lon=\"1\"/></osm>").unwrap_err();
    assert!(matches!(err, IngestError::InvalidPosition { ref node, .. } if node == "7"));
}

#[test]
fn tag_without_value_is_malformed() {
    let err = read_osm_str("<osm><node lat=\"1\" lon=\"2\"><tag k=\"STREET\"/></node></osm>")
        .unwrap_err();
    assert!(matches!(err, IngestError::Malformed { .. }));
}

#[test]
fn mismatched_tags_are_xml_errors() {
    let err = read_osm_str("<osm><node lat=\"1\" lon=\"2\"></osm>").unwrap_err();
    assert!(matches!(err, IngestError::Xml { .. } | IngestError::Malformed { .. }));
}

#[test]
fn reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.osm");
    fs::write(&path, SAMPLE).unwrap();
    assert_eq!(read_osm_file(&path).unwrap().len(), 3);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_osm_file(&dir.path().join("nope.osm")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}
