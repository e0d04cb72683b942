use super::*;

#[test]
fn one_property_indented() {
    let out = write_str(Options::indented(), |w| {
        w.start_object()?;
        w.property_name("a")?;
        w.number_value(1)?;
        w.end_object()
    });
    assert_eq!(out, "{\n  \"a\": 1\n}");
}

#[test]
fn empty_containers_stay_on_one_line() {
    let out = write_str(Options::indented(), |w| {
        w.start_object()?;
        w.end_object()
    });
    assert_eq!(out, "{}");
    let out = write_str(Options::indented(), |w| {
        w.start_array()?;
        w.end_array()
    });
    assert_eq!(out, "[]");
}

#[test]
fn nested_indentation() {
    let out = write_str(Options::indented(), |w| {
        w.start_object()?;
        w.property_name("list")?;
        w.start_array()?;
        w.number_value(1)?;
        w.number_value(2)?;
        w.end_array()?;
        w.end_object()
    });
    assert_eq!(out, "{\n  \"list\": [\n    1,\n    2\n  ]\n}");
}

#[test]
fn custom_indent_width() {
    let mut o = Options::indented();
    o.indent_width = 4;
    let out = write_str(o, |w| {
        w.start_object()?;
        w.property_name("a")?;
        w.bool_value(true)?;
        w.end_object()
    });
    assert_eq!(out, "{\n    \"a\": true\n}");
}

#[test]
fn array_of_objects_indented() {
    let out = write_str(Options::indented(), |w| {
        w.start_array()?;
        w.start_object()?;
        w.property_name("x")?;
        w.number_value(1)?;
        w.end_object()?;
        w.start_object()?;
        w.end_object()?;
        w.end_array()
    });
    assert_eq!(out, "[\n  {\n    \"x\": 1\n  },\n  {}\n]");
}

#[test]
fn indented_output_still_parses() {
    let out = write_str(Options::indented(), |w| {
        w.start_object()?;
        w.property_name("nested")?;
        w.start_object()?;
        w.property_name("deep")?;
        w.start_array()?;
        w.string_value("v")?;
        w.null_value()?;
        w.end_array()?;
        w.end_object()?;
        w.end_object()
    });
    let v = parse(&out);
    assert_eq!(v["nested"]["deep"], serde_json::json!(["v", null]));
}
