use super::*;

#[test]
fn fused_calls_match_two_call_sequences() {
    let fused = write_str(opts(), |w| {
        w.start_object()?;
        w.property_and_string("s", "v\"")?;
        w.property_and_number("n", 42u64)?;
        w.property_and_f64("f", 2.5)?;
        w.property_and_bool("b", true)?;
        w.property_and_null("z")?;
        w.end_object()
    });
    let split = write_str(opts(), |w| {
        w.start_object()?;
        w.property_name("s")?;
        w.string_value("v\"")?;
        w.property_name("n")?;
        w.number_value(42u64)?;
        w.property_name("f")?;
        w.f64_value(2.5)?;
        w.property_name("b")?;
        w.bool_value(true)?;
        w.property_name("z")?;
        w.null_value()?;
        w.end_object()
    });
    assert_eq!(fused, split);
}

#[test]
fn fused_calls_match_when_indented() {
    let fused = write_str(Options::indented(), |w| {
        w.start_object()?;
        w.property_and_number("a", 1)?;
        w.property_and_guid("g", [7; 16])?;
        w.property_and_base64("d", b"ab")?;
        w.end_object()
    });
    let split = write_str(Options::indented(), |w| {
        w.start_object()?;
        w.property_name("a")?;
        w.number_value(1)?;
        w.property_name("g")?;
        w.guid_value([7; 16])?;
        w.property_name("d")?;
        w.base64_value(b"ab")?;
        w.end_object()
    });
    assert_eq!(fused, split);
}

#[test]
fn fused_date_time() {
    let dt = DateTime::ymd(1999, 12, 31);
    let out = write_str(opts(), |w| {
        w.start_object()?;
        w.property_and_date_time("ts", &dt)?;
        w.end_object()
    });
    assert_eq!(out, "{\"ts\":\"1999-12-31T00:00:00\"}");
}

#[test]
fn fused_float_rejects_before_writing_name() {
    let mut w = Writer::new(VecSink::new());
    w.start_object().unwrap();
    let before = w.bytes_pending();
    let err = w.property_and_f64("bad", f64::NAN).unwrap_err();
    assert_eq!(err.kind, WriteErrorKind::InvalidFloatValue);
    // Neither the name nor the value was committed.
    assert_eq!(w.bytes_pending(), before);
    w.property_and_f64("good", 1.0).unwrap();
    w.end_object().unwrap();
    w.flush().unwrap();
    assert_eq!(w.sink_ref().as_slice(), b"{\"good\":1.0}" as &[u8]);
}

#[test]
fn fused_value_failure_leaves_name_committed() {
    let mut buf = [0u8; 10];
    let mut w = Writer::new(FixedSink::new(&mut buf));
    w.start_object().unwrap();
    let err = w
        .property_and_string("k", "way too long for this buffer")
        .unwrap_err();
    assert_eq!(err.kind, WriteErrorKind::OutOfSpace);
    // The name committed; the writer expects a value, as in the two-call
    // form.
    w.string_value("v").unwrap();
    w.end_object().unwrap();
    assert_eq!(w.sink_ref().as_slice(), b"{\"k\":\"v\"}" as &[u8]);
}

#[test]
fn fused_calls_respect_structure_rules() {
    let mut w = Writer::new(VecSink::new());
    w.start_array().unwrap();
    assert_eq!(
        w.property_and_number("a", 1).unwrap_err().kind,
        WriteErrorKind::InvalidOperation
    );
}
