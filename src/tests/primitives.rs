use super::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

#[test]
fn date_time_without_zone() {
    let dt = DateTime::ymd(2026, 8, 2);
    assert_eq!(
        write_str(opts(), |w| w.date_time_value(&dt)),
        "\"2026-08-02T00:00:00\""
    );
}

#[test]
fn date_time_utc_and_offsets() {
    let mut dt = DateTime::ymd(2026, 8, 2);
    dt.hour = 12;
    dt.minute = 34;
    dt.second = 56;
    dt.offset_minutes = Some(0);
    assert_eq!(
        write_str(opts(), |w| w.date_time_value(&dt)),
        "\"2026-08-02T12:34:56Z\""
    );
    dt.offset_minutes = Some(330);
    assert_eq!(
        write_str(opts(), |w| w.date_time_value(&dt)),
        "\"2026-08-02T12:34:56+05:30\""
    );
    dt.offset_minutes = Some(-480);
    assert_eq!(
        write_str(opts(), |w| w.date_time_value(&dt)),
        "\"2026-08-02T12:34:56-08:00\""
    );
}

#[test]
fn date_time_fraction_trims_trailing_zeros() {
    let mut dt = DateTime::ymd(2024, 1, 31);
    dt.nanosecond = 123_000_000;
    assert_eq!(
        write_str(opts(), |w| w.date_time_value(&dt)),
        "\"2024-01-31T00:00:00.123\""
    );
    dt.nanosecond = 1;
    assert_eq!(
        write_str(opts(), |w| w.date_time_value(&dt)),
        "\"2024-01-31T00:00:00.000000001\""
    );
}

#[test]
fn guid_formats_hyphenated_lowercase() {
    let guid = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA, 0xBB, 0xCC, 0xDD,
        0xEE, 0xFF,
    ];
    assert_eq!(
        write_str(opts(), |w| w.guid_value(guid)),
        "\"00112233-4455-6677-8899-aabbccddeeff\""
    );
}

#[test]
fn base64_padding_cases() {
    assert_eq!(write_str(opts(), |w| w.base64_value(b"")), "\"\"");
    assert_eq!(write_str(opts(), |w| w.base64_value(b"f")), "\"Zg==\"");
    assert_eq!(write_str(opts(), |w| w.base64_value(b"fo")), "\"Zm8=\"");
    assert_eq!(write_str(opts(), |w| w.base64_value(b"foo")), "\"Zm9v\"");
}

#[test]
fn base64_chunked_matches_single_shot() {
    // Larger than one encode chunk; output must equal a one-call encode.
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let out = write_str(opts(), |w| w.base64_value(&data));
    assert_eq!(out, format!("\"{}\"", STANDARD.encode(&data)));
}

#[test]
fn base64_inside_object() {
    let out = write_str(opts(), |w| {
        w.start_object()?;
        w.property_name("blob")?;
        w.base64_value(&[1, 2, 3, 4])?;
        w.end_object()
    });
    assert_eq!(out, "{\"blob\":\"AQIDBA==\"}");
    let v = parse(&out);
    let decoded = STANDARD.decode(v["blob"].as_str().unwrap()).unwrap();
    assert_eq!(decoded, [1, 2, 3, 4]);
}

#[test]
fn primitive_values_count_as_values_in_structure() {
    // Each behaves as a string value for separator and transition purposes.
    let dt = DateTime::ymd(2000, 1, 1);
    let out = write_str(opts(), |w| {
        w.start_array()?;
        w.date_time_value(&dt)?;
        w.guid_value([0; 16])?;
        w.base64_value(b"x")?;
        w.end_array()
    });
    assert_eq!(
        out,
        "[\"2000-01-01T00:00:00\",\"00000000-0000-0000-0000-000000000000\",\"eA==\"]"
    );
}
