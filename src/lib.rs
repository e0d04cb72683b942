//! Streaming UTF-8 JSON writer.
//!
//! A forward-only token encoder: tokens are appended into a caller-supplied
//! byte sink, structure is validated as they arrive, and string payloads are
//! escaped per RFC 8259 plus a defensive set so output can be embedded in
//! HTML/XML/JS string contexts without further processing.
//!
//! ```
//! use jsonwrite::{VecSink, Writer};
//!
//! let mut w = Writer::new(VecSink::new());
//! w.start_object()?;
//! w.property_name("a")?;
//! w.number_value(1)?;
//! w.end_object()?;
//! w.flush()?;
//! assert_eq!(w.sink_ref().as_slice(), b"{\"a\":1}");
//! # Ok::<(), jsonwrite::WriteError>(())
//! ```
//!
//! Output goes wherever a [`BufferSink`] points: a growable [`VecSink`], a
//! caller-provided slice via [`FixedSink`], or anything [`std::io::Write`]
//! via [`IoSink`].

mod classify;
mod error;
mod escape;
mod fmt;
mod options;
mod pool;
mod sink;
mod state;
#[cfg(feature = "serde")]
mod value;
mod writer;

pub use error::{WriteError, WriteErrorKind};
pub use fmt::DateTime;
pub use options::Options;
pub use pool::ScratchPool;
pub use sink::{BufferSink, FixedSink, IoSink, VecSink};
#[cfg(feature = "serde")]
pub use value::write_value;
pub use writer::Writer;

/// Runs `f` against a writer over a fresh [`VecSink`], flushes, and returns
/// the produced bytes.
///
/// ```
/// let out = jsonwrite::write_to_vec(jsonwrite::Options::default(), |w| {
///     w.start_array()?;
///     w.bool_value(true)?;
///     w.end_array()
/// })?;
/// assert_eq!(out, b"[true]");
/// # Ok::<(), jsonwrite::WriteError>(())
/// ```
pub fn write_to_vec<F>(opts: Options, f: F) -> Result<Vec<u8>, WriteError>
where
    F: FnOnce(&mut Writer<VecSink>) -> Result<(), WriteError>,
{
    let mut w = Writer::with_options(VecSink::new(), opts);
    f(&mut w)?;
    w.flush()?;
    Ok(w.into_sink().into_vec())
}

#[cfg(test)]
mod tests;
