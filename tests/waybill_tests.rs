use awb_gen::layout::wrap_text;
use awb_gen::{
    AirWaybill, ChargesSummary, ConsignmentInfo, Document, Face, FlightBookingInfo, Font,
    OtherCharge, PageContents, PageStyle, PartyInfo, RateLineItem, SpanLayout, WaybillLayout,
};

fn sample_waybill() -> AirWaybill {
    AirWaybill {
        consignment: ConsignmentInfo {
            waybill_number: "124-45678901".to_string(),
            origin_airport: "ORY".to_string(),
            issuer: "Air Transport Services".to_string(),
            issued_by: "Paris Orly cargo desk".to_string(),
        },
        shipper: PartyInfo {
            account_number: "SHP-20415".to_string(),
            name: "Pompes Funebres Martin".to_string(),
            address: "18 rue de la Republique".to_string(),
            city: "Lyon".to_string(),
            country: "France".to_string(),
            postal_code: "69002".to_string(),
        },
        consignee: PartyInfo {
            name: "Funerarium El Djazair".to_string(),
            city: "Alger".to_string(),
            country: "Algerie".to_string(),
            ..Default::default()
        },
        flight: FlightBookingInfo {
            departure: "ORY".to_string(),
            route: "ORY-ALG direct".to_string(),
            destination: "ALG".to_string(),
            flight_date: "AH1007 / 18 MAR".to_string(),
            carrier: "Air Algerie".to_string(),
        },
        rate_lines: vec![RateLineItem {
            pieces: "1".to_string(),
            gross_weight: "185.0".to_string(),
            weight_unit: "kg".to_string(),
            rate_class: "Q".to_string(),
            chargeable_weight: "185.0".to_string(),
            rate: "4.10".to_string(),
            total: "758.50".to_string(),
            nature_goods: "HUM - human remains in sealed coffin".to_string(),
            ..Default::default()
        }],
        summary: ChargesSummary {
            weight_charge: "758.50".to_string(),
            total: "985.20".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn spans_of(doc: &Document, page_index: usize) -> Vec<SpanLayout> {
    let id = doc.page_order[page_index];
    doc.pages[id]
        .contents
        .iter()
        .filter_map(|c| match c {
            PageContents::Text(spans) => Some(spans.iter().cloned()),
            _ => None,
        })
        .flatten()
        .collect()
}

fn all_spans(doc: &Document) -> Vec<SpanLayout> {
    (0..doc.page_order.len())
        .flat_map(|i| spans_of(doc, i))
        .collect()
}

fn raw_count(doc: &Document) -> usize {
    doc.page_order
        .iter()
        .map(|id| {
            doc.pages[*id]
                .contents
                .iter()
                .filter(|c| matches!(c, PageContents::RawContent(_)))
                .count()
        })
        .sum()
}

#[test]
fn other_charges_section_is_omitted_when_empty() {
    let _ = env_logger::builder().is_test(true).try_init();

    let layout = WaybillLayout::new();
    let mut awb = sample_waybill();

    awb.other_charges.clear();
    let doc = layout.layout(&awb);
    assert!(
        !all_spans(&doc).iter().any(|s| s.text == "OTHER CHARGES"),
        "empty sequence must suppress the section header entirely"
    );

    awb.other_charges.push(OtherCharge {
        description: "Handling".to_string(),
        amount: "45.00".to_string(),
        entitlement: "A".to_string(),
    });
    let doc = layout.layout(&awb);
    let spans = all_spans(&doc);
    assert!(spans.iter().any(|s| s.text == "OTHER CHARGES"));
    assert!(spans.iter().any(|s| s.text.contains("Handling")));
}

#[test]
fn one_row_per_rate_line_item() {
    let _ = env_logger::builder().is_test(true).try_init();

    let layout = WaybillLayout::new();
    let mut awb = sample_waybill();
    let baseline_boxes = raw_count(&layout.layout(&awb));

    awb.rate_lines = (0..4)
        .map(|i| RateLineItem {
            pieces: format!("{}", i + 1),
            nature_goods: format!("consignment unit {i}"),
            ..Default::default()
        })
        .collect();
    let doc = layout.layout(&awb);

    // each data row contributes exactly one cell-outline content stream on
    // top of the fixed form; the fixture itself has one rate line
    assert_eq!(raw_count(&doc), baseline_boxes + 3);

    let spans = all_spans(&doc);
    for i in 0..4 {
        let marker = format!("consignment unit {i}");
        assert_eq!(spans.iter().filter(|s| s.text == marker).count(), 1);
    }
    // the header row is emitted even for an empty schedule
    awb.rate_lines.clear();
    let spans = all_spans(&layout.layout(&awb));
    assert!(spans
        .iter()
        .any(|s| s.text == "Nature and Quantity of Goods"));
}

#[test]
fn artifact_file_name_derives_from_waybill_number() {
    let layout = WaybillLayout::new();
    let mut awb = sample_waybill();
    awb.consignment.waybill_number = "LTA123".to_string();
    let artifact = layout.render(&awb).unwrap();
    assert_eq!(artifact.file_name, "LTA_LTA123.pdf");

    awb.consignment.waybill_number.clear();
    let artifact = layout.render(&awb).unwrap();
    assert_eq!(artifact.file_name, "LTA_document.pdf");
}

#[test]
fn long_values_wrap_and_advance_the_cursor() {
    let _ = env_logger::builder().is_test(true).try_init();

    let layout = WaybillLayout::new();
    let style = PageStyle::default();
    let font = Font::builtin(Face::Courier);

    let mut awb = sample_waybill();
    let base_doc = layout.layout(&awb);
    let long_address = "appartement 12, escalier B, residence des Acacias, \
        458 avenue du General de Gaulle, quartier de la Prefecture"
        .to_string();
    awb.shipper.address = long_address.clone();
    let long_doc = layout.layout(&awb);

    let title_y = |doc: &Document| {
        spans_of(doc, 0)
            .iter()
            .find(|s| s.text == "CONSIGNEE")
            .expect("consignee section title")
            .coords
            .1
    };

    let id = base_doc.page_order[0];
    let wrap_width = base_doc.pages[id].content_box.width() - style.cell_padding * 2.0;
    let lines = wrap_text(
        &format!("Address: {long_address}"),
        &font,
        style.text_size,
        wrap_width,
    );
    assert!(lines.len() > 1, "the long address must actually wrap");

    // everything below the shipper box moves down by exactly the extra lines
    let expected = font.line_height(style.text_size) * (lines.len() as f32 - 1.0);
    let delta = title_y(&base_doc).0 - title_y(&long_doc).0;
    assert!(
        (delta - expected.0).abs() < 0.05,
        "cursor advanced by {delta}pt, expected {}pt",
        expected.0
    );
}

#[test]
fn identical_records_render_identical_bytes() {
    let layout = WaybillLayout::new();
    let awb = sample_waybill();
    let first = layout.render(&awb).unwrap();
    let second = layout.render(&awb).unwrap();
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn rate_table_paginates_when_the_form_overruns() {
    let _ = env_logger::builder().is_test(true).try_init();

    let layout = WaybillLayout::new();
    let style = PageStyle::default();
    let mut awb = sample_waybill();
    awb.shipper.address = "avenue ".repeat(600);
    let doc = layout.layout(&awb);

    assert_eq!(doc.page_order.len(), 2);
    let header = "Nature and Quantity of Goods";
    assert!(
        !spans_of(&doc, 0).iter().any(|s| s.text == header),
        "the rate schedule must leave the overrun page"
    );
    let second = spans_of(&doc, 1);
    let header_span = second
        .iter()
        .find(|s| s.text == header)
        .expect("rate schedule header on the fresh page");

    // the schedule starts at the top margin of the new page
    let id = doc.page_order[1];
    let top = doc.pages[id].content_box.y2;
    assert!(
        (top.0 - header_span.coords.1 .0) < style.table_header_height.0,
        "schedule header should sit in the first row under the top margin"
    );
}

#[test]
fn right_column_height_never_moves_the_cursor() {
    let _ = env_logger::builder().is_test(true).try_init();

    let layout = WaybillLayout::new();
    let mut awb = sample_waybill();
    let base_doc = layout.layout(&awb);

    // pin the left-anchored policy: a tall right column does not push the
    // following section down
    awb.consignment.issuer = "groupement de transports funeraires internationaux ".repeat(8);
    let tall_doc = layout.layout(&awb);

    let routing_y = |doc: &Document| {
        spans_of(doc, 0)
            .iter()
            .find(|s| s.text == "ROUTING AND BOOKING")
            .expect("routing section title")
            .coords
            .1
    };
    assert_eq!(routing_y(&base_doc).0, routing_y(&tall_doc).0);
}
