//! Tests for OSM XML and JSON report output.

use std::fs;

use addr_model::{BatchReport, Diagnostic, NodeId, NormalizedRecord, Position, SkipReason};
use addr_output::{OsmXmlOptions, write_osm_xml, write_osm_xml_file, write_report_json};

fn record(id: i64, house: &str, street: &str) -> NormalizedRecord {
    NormalizedRecord {
        id: NodeId::new(id).unwrap(),
        position: Position::new("40.4864000", "-86.1336000").unwrap(),
        house_number: house.to_string(),
        street: street.to_string(),
    }
}

fn render(records: &[NormalizedRecord], options: &OsmXmlOptions) -> String {
    let mut out = Vec::new();
    write_osm_xml(&mut out, records, options).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn writes_upload_ready_nodes() {
    let records = vec![
        record(-748, "101", "North Main Street"),
        record(-749, "7", "O'Neil & Sons Ave"),
    ];
    let xml = render(&records, &OsmXmlOptions::default());
    insta::assert_snapshot!(xml.trim_end(), @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <osm version="0.6" upload="true" generator="osm-addr">
      <node id="-748" lat="40.4864000" lon="-86.1336000" visible="true">
        <tag k="addr:housenumber" v="101"/>
        <tag k="addr:street" v="North Main Street"/>
      </node>
      <node id="-749" lat="40.4864000" lon="-86.1336000" visible="true">
        <tag k="addr:housenumber" v="7"/>
        <tag k="addr:street" v="O&apos;Neil &amp; Sons Ave"/>
      </node>
    </osm>
    "#);
}

#[test]
fn empty_collection_still_has_root() {
    let xml = render(&[], &OsmXmlOptions::new("kokomo-addresses"));
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("generator=\"kokomo-addresses\""));
    assert!(xml.trim_end().ends_with("</osm>"));
    assert!(!xml.contains("<node"));
}

#[test]
fn output_reads_back_with_same_values() {
    let records = vec![record(-748, "12", "South Elm Street")];
    let xml = render(&records, &OsmXmlOptions::default());
    let parsed = node_summaries(&xml);
    assert_eq!(parsed, vec![("-748".to_string(), "12".to_string(), "South Elm Street".to_string())]);
}

fn node_summaries(xml: &str) -> Vec<(String, String, String)> {
    let mut out = Vec::new();
    let mut id = String::new();
    let mut house = String::new();
    for line in xml.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix("<node id=\"") {
            id = rest.split('"').next().unwrap().to_string();
        } else if let Some(rest) = line.strip_prefix("<tag k=\"addr:housenumber\" v=\"") {
            house = rest.split('"').next().unwrap().to_string();
        } else if let Some(rest) = line.strip_prefix("<tag k=\"addr:street\" v=\"") {
            let street = rest.split('"').next().unwrap().to_string();
            out.push((id.clone(), house.clone(), street));
        }
    }
    out
}

#[test]
fn writes_file_creating_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/nested/addresses.osm");
    write_osm_xml_file(&path, &[record(-748, "1", "Main")], &OsmXmlOptions::default()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("<node id=\"-748\""));
}

#[test]
fn writes_json_report() {
    let mut report = BatchReport::default();
    report.record_skip(SkipReason::Retired);
    report.diagnostics.push(Diagnostic::Skipped {
        reason: SkipReason::Retired,
        label: Some("5 ELM ST".to_string()),
    });
    report.record_accept(NodeId::new(-748).unwrap());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_report_json(&path, &report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["total"], 2);
    assert_eq!(value["skipped_by_reason"]["retired"], 1);
    assert_eq!(value["first_id"], -748);
    assert_eq!(value["diagnostics"][0]["label"], "5 ELM ST");
}
