use awb_gen::{BookingConfirmation, ConfirmationLayout, PageContents};

fn sample_booking() -> BookingConfirmation {
    BookingConfirmation {
        reference: "BK-2041".to_string(),
        passenger_name: "J. Martin".to_string(),
        departure: "ORY".to_string(),
        destination: "ALG".to_string(),
        flight: "AH1007".to_string(),
        departure_date: "2024-03-18".to_string(),
        carrier: "Air Algerie".to_string(),
    }
}

#[test]
fn confirmation_is_a_single_fixed_page() {
    let _ = env_logger::builder().is_test(true).try_init();

    let layout = ConfirmationLayout::new();
    let doc = layout.layout(&sample_booking());
    assert_eq!(doc.page_order.len(), 1);

    let id = doc.page_order[0];
    let texts: Vec<String> = doc.pages[id]
        .contents
        .iter()
        .filter_map(|c| match c {
            PageContents::Text(spans) => Some(spans.iter().map(|s| s.text.clone())),
            _ => None,
        })
        .flatten()
        .collect();
    assert!(texts.iter().any(|t| t == "BOOKING CONFIRMATION"));
    assert!(texts.iter().any(|t| t == "Reference: BK-2041"));
    assert!(texts.iter().any(|t| t == "Passenger: J. Martin"));
}

#[test]
fn confirmation_renders_reproducibly() {
    let layout = ConfirmationLayout::new();
    let booking = sample_booking();
    let first = layout.render(&booking).unwrap();
    let second = layout.render(&booking).unwrap();
    assert_eq!(first.file_name, "CONF_BK-2041.pdf");
    assert_eq!(first.bytes, second.bytes);
}
