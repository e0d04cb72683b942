use crate::error::WriteError;
use crate::sink::BufferSink;
use crate::writer::Writer;

/// Streams a [`serde_json::Value`] tree through the writer, depth first.
/// Numbers keep their serde representation: integers format natively and
/// floats go through the shortest round-trip path (non-finite floats cannot
/// occur inside a `Value`).
pub fn write_value<S: BufferSink>(
    w: &mut Writer<S>,
    value: &serde_json::Value,
) -> Result<(), WriteError> {
    match value {
        serde_json::Value::Null => w.null_value(),
        serde_json::Value::Bool(b) => w.bool_value(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                w.number_value(i)
            } else if let Some(u) = n.as_u64() {
                w.number_value(u)
            } else {
                // as_f64 is total for a finite serde_json number
                w.f64_value(n.as_f64().unwrap_or_default())
            }
        }
        serde_json::Value::String(s) => w.string_value(s),
        serde_json::Value::Array(items) => {
            w.start_array()?;
            for item in items {
                write_value(w, item)?;
            }
            w.end_array()
        }
        serde_json::Value::Object(map) => {
            w.start_object()?;
            for (name, item) in map {
                w.property_name(name)?;
                write_value(w, item)?;
            }
            w.end_object()
        }
    }
}
