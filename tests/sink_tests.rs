use awb_gen::{AirWaybill, AwbError, FileSink, OutputSink, WaybillLayout};

fn minimal_waybill() -> AirWaybill {
    let mut awb = AirWaybill::default();
    awb.consignment.waybill_number = "124-00000011".to_string();
    awb
}

#[test]
fn persists_under_the_derived_name() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let artifact = WaybillLayout::new().render(&minimal_waybill()).unwrap();

    let mut sink = FileSink::new(dir.path());
    sink.persist(&artifact).unwrap();

    let written = std::fs::read(dir.path().join("LTA_124-00000011.pdf")).unwrap();
    assert_eq!(written, artifact.bytes);
    assert!(written.starts_with(b"%PDF"));
}

#[test]
fn missing_directory_is_a_sink_failure() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = WaybillLayout::new().render(&minimal_waybill()).unwrap();

    let mut sink = FileSink::new(dir.path().join("does-not-exist"));
    let err = sink.persist(&artifact).unwrap_err();
    assert!(matches!(err, AwbError::Sink { .. }));
}
