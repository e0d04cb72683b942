use crate::error::WriteErrorKind;
use std::io::Write;

const MIN_CAPACITY: usize = 256;

/// Byte destination for the writer. The contract is narrow: `get_span`
/// returns a contiguous writable region of at least `min_size` bytes starting
/// where the next byte belongs, `advance` declares a prefix of the last span
/// valid, and `flush` (optional) surrenders accepted bytes downstream.
///
/// Growth must preserve previously written, unflushed bytes at their original
/// offsets. Implementations report failures as [`WriteErrorKind`] values; the
/// writer attaches the output offset.
pub trait BufferSink {
    fn get_span(&mut self, min_size: usize) -> Result<&mut [u8], WriteErrorKind>;
    fn advance(&mut self, n: usize) -> Result<(), WriteErrorKind>;
    fn flush(&mut self) -> Result<(), WriteErrorKind> {
        Ok(())
    }
}

/// Growable in-memory sink. The backing vector doubles on demand and is
/// reused across `clear` calls.
#[derive(Debug, Default)]
pub struct VecSink {
    buf: Vec<u8>,
    len: usize,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: vec![0; cap],
            len: 0,
        }
    }

    /// Bytes accepted so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resets the sink for reuse without releasing the allocation.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        self.buf.truncate(self.len);
        self.buf
    }
}

impl BufferSink for VecSink {
    fn get_span(&mut self, min_size: usize) -> Result<&mut [u8], WriteErrorKind> {
        if self.buf.len() - self.len < min_size {
            let wanted = self
                .len
                .checked_add(min_size)
                .ok_or(WriteErrorKind::ArgumentTooLarge)?;
            let doubled = self.buf.len().saturating_mul(2).max(MIN_CAPACITY);
            self.buf.resize(wanted.max(doubled), 0);
        }
        Ok(&mut self.buf[self.len..])
    }

    fn advance(&mut self, n: usize) -> Result<(), WriteErrorKind> {
        if n > self.buf.len() - self.len {
            return Err(WriteErrorKind::Overcommit);
        }
        self.len += n;
        Ok(())
    }
}

/// Sink over a caller-provided slice. Fails with `OutOfSpace` when a
/// reservation cannot be satisfied.
#[derive(Debug)]
pub struct FixedSink<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> FixedSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes accepted so far.
    pub fn written(&self) -> usize {
        self.len
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl BufferSink for FixedSink<'_> {
    fn get_span(&mut self, min_size: usize) -> Result<&mut [u8], WriteErrorKind> {
        if self.buf.len() - self.len < min_size {
            return Err(WriteErrorKind::OutOfSpace);
        }
        Ok(&mut self.buf[self.len..])
    }

    fn advance(&mut self, n: usize) -> Result<(), WriteErrorKind> {
        if n > self.buf.len() - self.len {
            return Err(WriteErrorKind::Overcommit);
        }
        self.len += n;
        Ok(())
    }
}

/// Sink that buffers in memory and surrenders bytes to an [`io::Write`]
/// target on `flush`. Blocking, cancellation, and timeouts are the target's
/// concern, not the writer's.
///
/// [`io::Write`]: std::io::Write
#[derive(Debug)]
pub struct IoSink<W: Write> {
    target: W,
    buf: Vec<u8>,
    len: usize,
}

impl<W: Write> IoSink<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            buf: Vec::new(),
            len: 0,
        }
    }

    /// Flushes any buffered bytes and returns the target.
    pub fn into_inner(mut self) -> Result<W, WriteErrorKind> {
        BufferSink::flush(&mut self)?;
        Ok(self.target)
    }
}

impl<W: Write> BufferSink for IoSink<W> {
    fn get_span(&mut self, min_size: usize) -> Result<&mut [u8], WriteErrorKind> {
        if self.buf.len() - self.len < min_size {
            let wanted = self
                .len
                .checked_add(min_size)
                .ok_or(WriteErrorKind::ArgumentTooLarge)?;
            let doubled = self.buf.len().saturating_mul(2).max(MIN_CAPACITY);
            self.buf.resize(wanted.max(doubled), 0);
        }
        Ok(&mut self.buf[self.len..])
    }

    fn advance(&mut self, n: usize) -> Result<(), WriteErrorKind> {
        if n > self.buf.len() - self.len {
            return Err(WriteErrorKind::Overcommit);
        }
        self.len += n;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), WriteErrorKind> {
        if self.len > 0 {
            self.target.write_all(&self.buf[..self.len])?;
            self.len = 0;
        }
        self.target.flush()?;
        Ok(())
    }
}
