use crate::*;

// Shared test helpers

fn opts() -> Options {
    Options::default()
}

fn write_str<F>(opts: Options, f: F) -> String
where
    F: FnOnce(&mut Writer<VecSink>) -> Result<(), WriteError>,
{
    let bytes = crate::write_to_vec(opts, f).unwrap();
    String::from_utf8(bytes).unwrap()
}

fn parse(s: &str) -> serde_json::Value {
    serde_json::from_str(s).unwrap()
}

mod indentation;
mod paired;
mod primitives;
