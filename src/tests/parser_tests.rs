use crate::domain::{FlightManifest, SourceLayout};
use crate::parse::select::select_best;
use crate::parse::subject::{backfill, header_from_subject};
use crate::parse::{columnar, extract_manifests, freetext, horizontal};

const HORIZONTAL_DOC: &str = "\
FLIGHT  WY223  DATE  18.JUL  DESTINATION  COK
AWB  PCS  KGS  DESCRIPTION  REASON
91012345  35  781  COURIER  SPACE
TOTAL  35  781
";

#[test]
fn horizontal_label_row_is_recognized() {
    let manifests = horizontal::parse(HORIZONTAL_DOC);
    assert_eq!(manifests.len(), 1);

    let m = &manifests[0];
    assert_eq!(m.flight, "WY223");
    assert_eq!(m.date, "18.JUL");
    assert_eq!(m.destination, "COK");
    assert_eq!(m.layout, SourceLayout::Horizontal);
    assert_eq!(m.shipments.len(), 1);

    let s = &m.shipments[0];
    assert_eq!(s.awb, "91012345");
    assert_eq!(s.pieces, "35");
    assert_eq!(s.weight, "781");
    assert_eq!(s.description, "COURIER");
    assert_eq!(s.reason, "SPACE");
}

#[test]
fn horizontal_html_table_parses_like_text() {
    let html = "<html><body><table>\
<tr><td>FLIGHT</td><td>WY223</td><td>DATE</td><td>18.JUL</td><td>DESTINATION</td><td>COK</td></tr>\
<tr><td>AWB</td><td>PCS</td><td>KGS</td><td>DESCRIPTION</td><td>REASON</td></tr>\
<tr><td>91012345</td><td>35</td><td>781</td><td>COURIER</td><td>SPACE</td></tr>\
<tr><td>TOTAL</td><td>35</td><td>781</td></tr>\
</table></body></html>";

    let manifests = horizontal::parse(html);
    assert_eq!(manifests.len(), 1);
    assert_eq!(manifests[0].flight, "WY223");
    assert_eq!(manifests[0].shipments.len(), 1);
    assert_eq!(manifests[0].shipments[0].awb, "91012345");
}

#[test]
fn horizontal_filters_row_index_waybills() {
    let doc = "\
FLIGHT  WY223  DATE  18.JUL  DEST  COK
AWB  PCS  KGS  DESCRIPTION  REASON
3  1  10  SKIPPED  SPACE
3A  1  10  KEPT  SPACE
";
    let manifests = horizontal::parse(doc);
    assert_eq!(manifests.len(), 1);
    let awbs: Vec<&str> = manifests[0].shipments.iter().map(|s| s.awb.as_str()).collect();
    assert_eq!(awbs, vec!["3A"]);
}

#[test]
fn horizontal_uld_line_attaches_to_previous_shipment() {
    let doc = "\
FLIGHT  WY101  DATE  05MAR  DEST  DXB
AWB  PCS  KGS  DESCRIPTION  REASON
91011111  10  100  GENERAL  SPACE
AKE12345WY
91022222  4  55  PERISHABLE  WEIGHT
";
    let manifests = horizontal::parse(doc);
    assert_eq!(manifests.len(), 1);

    let shipments = &manifests[0].shipments;
    assert_eq!(shipments.len(), 2);
    assert_eq!(shipments[0].uld, "AKE12345WY");
    assert_eq!(shipments[1].uld, "");
}

#[test]
fn horizontal_multiple_flights_in_one_document() {
    let doc = "\
FLIGHT  WY223  DATE  18.JUL  DEST  COK
AWB  PCS  KGS  DESCRIPTION  REASON
91012345  35  781  COURIER  SPACE
TOTAL  35  781
FLIGHT  WY672  DATE  18.JUL  DEST  BOM
AWB  PCS  KGS  DESCRIPTION  REASON
91054321  2  40  VALUABLES  LOAD
";
    let manifests = horizontal::parse(doc);
    assert_eq!(manifests.len(), 2);
    assert_eq!(manifests[0].flight, "WY223");
    assert_eq!(manifests[1].flight, "WY672");
    assert_eq!(manifests[1].shipments[0].awb, "91054321");
}

const COLUMNAR_DOC: &str = "\
ITEM  DATE  FLIGHT  DEST  STD/ETD  AWB  PCS  KGS  REASON
1  18JUL  WY223  COK  0915  91012345  10  200  SPACE
2  18JUL  WY223  COK  0915  91054321  5  80  SPACE
1  18JUL  WY224  DXB  1100  91099999  3  40  WEIGHT
";

#[test]
fn columnar_splits_manifests_on_flight_change() {
    let manifests = columnar::parse(COLUMNAR_DOC);
    assert_eq!(manifests.len(), 2);

    assert_eq!(manifests[0].flight, "WY223");
    assert_eq!(manifests[0].destination, "COK");
    assert_eq!(manifests[0].std_etd, "09:15");
    assert_eq!(manifests[0].shipments.len(), 2);

    assert_eq!(manifests[1].flight, "WY224");
    assert_eq!(manifests[1].destination, "DXB");
    assert_eq!(manifests[1].shipments.len(), 1);
    assert_eq!(manifests[1].shipments[0].reason, "WEIGHT");
}

#[test]
fn columnar_title_row_does_not_fool_the_horizontal_parser() {
    // The title row contains FLIGHT and DATE, but as column names: the
    // "value" after FLIGHT is the next title, which is a header word.
    assert!(horizontal::parse(COLUMNAR_DOC).is_empty());
    let selected = extract_manifests(COLUMNAR_DOC);
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[0].layout, SourceLayout::Columnar);
}

#[test]
fn columnar_total_footer_does_not_open_a_manifest() {
    // Footer totals land under whatever columns the sender picked, so
    // "200" can sit in the flight position and "10" in the date one.
    let doc = "\
ITEM  DATE  FLIGHT  DEST  STD/ETD  AWB  PCS  KGS  REASON
1  18JUL  WY223  COK  0915  91012345  10  200  SPACE
TOTAL  10  200
";
    let manifests = columnar::parse(doc);
    assert_eq!(manifests.len(), 1);
    assert_eq!(manifests[0].flight, "WY223");
    assert_eq!(manifests[0].shipments.len(), 1);
}

#[test]
fn horizontal_denylisted_destination_stays_blank() {
    // A header token in the destination slot is a parsing artifact,
    // never a real airport code.
    let doc = "\
FLIGHT  WY223  DATE  18.JUL  DEST  AWB
AWB  PCS  KGS  DESCRIPTION  REASON
91012345  35  781  COURIER  SPACE
";
    let manifests = horizontal::parse(doc);
    assert_eq!(manifests.len(), 1);
    assert_eq!(manifests[0].flight, "WY223");
    assert_eq!(manifests[0].destination, "");
    assert_eq!(manifests[0].shipments.len(), 1);
}

#[test]
fn columnar_denylisted_destination_stays_blank() {
    let doc = "\
ITEM  DATE  FLIGHT  DEST  AWB  PCS  KGS
1  18JUL  WY223  PCS  91012345  10  200
";
    let manifests = columnar::parse(doc);
    assert_eq!(manifests.len(), 1);
    assert_eq!(manifests[0].destination, "");
}

#[test]
fn horizontal_uld_line_before_first_shipment_is_held_pending() {
    let doc = "\
FLIGHT  WY101  DATE  05MAR  DEST  DXB
AWB  PCS  KGS  DESCRIPTION  REASON
AKE12345WY
91011111  10  100  GENERAL  SPACE
91022222  4  55  PERISHABLE  WEIGHT
";
    let manifests = horizontal::parse(doc);
    assert_eq!(manifests.len(), 1);

    let shipments = &manifests[0].shipments;
    assert_eq!(shipments.len(), 2);
    assert_eq!(shipments[0].uld, "AKE12345WY");
    assert_eq!(shipments[1].uld, "");
}

#[test]
fn columnar_alias_titles_resolve() {
    let doc = "\
ITEM  DATE  FLIGHT  DEST  STD/ATD  AWB  Offloading Pieces Verification  WEIGHT
1  02SEP  WY311  MAA  2215  91077777  7  95
";
    let manifests = columnar::parse(doc);
    assert_eq!(manifests.len(), 1);
    assert_eq!(manifests[0].std_etd, "22:15");
    assert_eq!(manifests[0].shipments[0].pieces, "7");
    assert_eq!(manifests[0].shipments[0].weight, "95");
}

const FREETEXT_DOC: &str = "\
QUOTE FM LOAD CONTROL
OFFLOADED CARGO ON WY627/27FEB
910 12345675  5  LEATHER GOODS  C  120.5  JED
910 12345686  2  SPARE PARTS  M  45  JED
CGO OFFLOAD DUE WEIGHT RESTRICTION
UNQUOTE
";

#[test]
fn freetext_block_parses_and_backfills_reason() {
    let manifests = freetext::parse(FREETEXT_DOC);
    assert_eq!(manifests.len(), 1);

    let m = &manifests[0];
    assert_eq!(m.flight, "WY627");
    assert_eq!(m.date, "27FEB");
    assert_eq!(m.destination, "JED");
    assert_eq!(m.layout, SourceLayout::FreeText);
    assert_eq!(m.shipments.len(), 2);

    assert_eq!(m.shipments[0].awb, "910 12345675");
    assert_eq!(m.shipments[0].pieces, "5");
    assert_eq!(m.shipments[0].description, "LEATHER GOODS");
    assert_eq!(m.shipments[0].weight, "120.5");
    assert_eq!(m.shipments[0].reason, "WEIGHT RESTRICTION");
    assert_eq!(m.shipments[1].reason, "WEIGHT RESTRICTION");
}

#[test]
fn freetext_first_reason_wins() {
    let doc = "\
OFFLOADED CARGO ON WY627/27FEB
910 12345675  5  LEATHER GOODS  C  120.5  JED
CGO OFFLOAD DUE WEIGHT RESTRICTION
CGO OFFLOADED DUE SPACE
";
    let manifests = freetext::parse(doc);
    assert_eq!(manifests[0].shipments[0].reason, "WEIGHT RESTRICTION");
}

#[test]
fn freetext_prose_lines_are_not_data() {
    let doc = "\
OFFLOADED CARGO ON WY627/27FEB
PLEASE NOTE THE BELOW SHIPMENT WAS LEFT BEHIND DUE SPACE
910 12345675  5  LEATHER GOODS  C  120.5  JED
";
    let manifests = freetext::parse(doc);
    assert_eq!(manifests[0].shipments.len(), 1);
}

#[test]
fn selector_prefers_horizontal_on_ties() {
    let mut h = FlightManifest::new(SourceLayout::Horizontal);
    h.flight = "WY223".into();
    h.shipments.push(sample_shipment("91012345"));

    let mut c = FlightManifest::new(SourceLayout::Columnar);
    c.flight = "WY223".into();
    c.shipments.push(sample_shipment("91012345"));

    let picked = select_best(vec![vec![h], vec![c], Vec::new()]);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].layout, SourceLayout::Horizontal);
}

#[test]
fn selector_all_empty_is_a_valid_outcome() {
    assert!(extract_manifests("nothing to see here").is_empty());
    assert!(extract_manifests("").is_empty());
}

#[test]
fn subject_line_yields_header_fields() {
    let header = header_from_subject("OFFLOADED CGO ON WY681 / 18NOV23 MCT-RUH");
    assert_eq!(header.flight, "WY681");
    assert_eq!(header.date, "18NOV23");
    assert_eq!(header.destination, "RUH");
}

#[test]
fn subject_backfill_never_overwrites_body_values() {
    let mut m = FlightManifest::new(SourceLayout::FreeText);
    m.flight = "WY627".into();
    m.shipments.push(sample_shipment("91012345"));
    let mut manifests = vec![m];

    let header = header_from_subject("OFFLOADED CGO ON WY681 / 18NOV23 MCT-RUH");
    backfill(&mut manifests, &header);

    assert_eq!(manifests[0].flight, "WY627");
    assert_eq!(manifests[0].date, "18NOV23");
    assert_eq!(manifests[0].destination, "RUH");
}

fn sample_shipment(awb: &str) -> crate::domain::ShipmentRecord {
    crate::domain::ShipmentRecord {
        awb: awb.to_string(),
        pieces: "1".into(),
        weight: "10".into(),
        description: "GENERAL".into(),
        reason: "SPACE".into(),
        uld: String::new(),
    }
}
