mod strings;
mod values;

use crate::error::{WriteError, WriteErrorKind};
use crate::options::Options;
use crate::pool::ScratchPool;
use crate::sink::BufferSink;
use crate::state::{StructState, Token};

/// Forward-only streaming JSON writer over a [`BufferSink`].
///
/// Every token call is transactional: the writer validates the transition,
/// reserves a window sized to the worst case, writes the token's bytes, and
/// only then advances the sink and mutates its own state. A failed call
/// commits nothing and leaves the writer usable; output up to that point is
/// valid JSON for the tokens accepted so far.
///
/// The writer is single-threaded and non-reentrant. Sharing one across
/// threads without external mutual exclusion is not supported.
pub struct Writer<S: BufferSink> {
    sink: S,
    state: StructState,
    opts: Options,
    pool: ScratchPool,
    pending: usize,
    committed: usize,
}

impl<S: BufferSink> Writer<S> {
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, Options::default())
    }

    pub fn with_options(sink: S, opts: Options) -> Self {
        Self::with_pool(sink, opts, ScratchPool::new())
    }

    /// Builds a writer over an injected scratch pool, letting callers reuse
    /// pooled escape buffers across writer instances.
    pub fn with_pool(sink: S, opts: Options, pool: ScratchPool) -> Self {
        Self {
            sink,
            state: StructState::new(),
            opts,
            pool,
            pending: 0,
            committed: 0,
        }
    }

    /// Current container nesting depth (0 = top level).
    pub fn current_depth(&self) -> usize {
        self.state.depth() as usize
    }

    /// Bytes surrendered to the sink by `flush` so far.
    pub fn bytes_committed(&self) -> usize {
        self.committed
    }

    /// Bytes written since the last `flush`.
    pub fn bytes_pending(&self) -> usize {
        self.pending
    }

    pub fn sink_ref(&self) -> &S {
        &self.sink
    }

    /// Consumes the writer and returns the sink. Call [`flush`](Self::flush)
    /// first if the sink buffers internally (e.g. [`IoSink`]).
    ///
    /// [`IoSink`]: crate::sink::IoSink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Surrenders pending bytes to the sink and advances the committed count.
    pub fn flush(&mut self) -> Result<(), WriteError> {
        let off = self.offset();
        self.sink.flush().map_err(|k| WriteError::new(k, off))?;
        self.committed += self.pending;
        self.pending = 0;
        Ok(())
    }

    pub fn start_object(&mut self) -> Result<(), WriteError> {
        self.start_container(true)
    }

    pub fn start_array(&mut self) -> Result<(), WriteError> {
        self.start_container(false)
    }

    pub fn end_object(&mut self) -> Result<(), WriteError> {
        self.end_container(true)
    }

    pub fn end_array(&mut self) -> Result<(), WriteError> {
        self.end_container(false)
    }

    // ---- shared plumbing for the token writer methods ----

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.committed + self.pending
    }

    #[inline]
    pub(crate) fn fail(&self, kind: WriteErrorKind) -> WriteError {
        WriteError::new(kind, self.offset())
    }

    fn start_container(&mut self, is_object: bool) -> Result<(), WriteError> {
        let off = self.offset();
        self.state
            .check_start_container(
                self.opts.max_depth,
                self.opts.multiple_values,
                self.opts.skip_validation,
            )
            .map_err(|k| WriteError::new(k, off))?;
        let lead = lead_len(&self.state, &self.opts);
        let span = self
            .sink
            .get_span(lead + 1)
            .map_err(|k| WriteError::new(k, off))?;
        let mut w = write_lead(span, &self.state, &self.opts);
        span[w] = if is_object { b'{' } else { b'[' };
        w += 1;
        self.sink.advance(w).map_err(|k| WriteError::new(k, off))?;
        self.pending += w;
        self.state.on_start_container(is_object);
        Ok(())
    }

    fn end_container(&mut self, is_object: bool) -> Result<(), WriteError> {
        let off = self.offset();
        if !self.opts.skip_validation {
            let check = if is_object {
                self.state.check_end_object()
            } else {
                self.state.check_end_array()
            };
            check.map_err(|k| WriteError::new(k, off))?;
        }
        let lead = close_lead_len(&self.state, &self.opts);
        let span = self
            .sink
            .get_span(lead + 1)
            .map_err(|k| WriteError::new(k, off))?;
        let mut w = 0;
        if lead > 0 {
            span[0] = b'\n';
            span[1..lead].fill(b' ');
            w = lead;
        }
        span[w] = if is_object { b'}' } else { b']' };
        w += 1;
        self.sink.advance(w).map_err(|k| WriteError::new(k, off))?;
        self.pending += w;
        self.state.on_end_container(is_object);
        Ok(())
    }

    pub(crate) fn check_value_token(&self) -> Result<(), WriteError> {
        if self.opts.skip_validation {
            return Ok(());
        }
        self.state
            .check_value(self.opts.multiple_values)
            .map_err(|k| self.fail(k))
    }

    /// Commits one token whose bytes beyond the lead are already known ASCII:
    /// literals, formatted numbers, and quoted primitive strings.
    pub(crate) fn commit_ascii_token(
        &mut self,
        token: Token,
        payload: &[u8],
    ) -> Result<(), WriteError> {
        let off = self.offset();
        let lead = lead_len(&self.state, &self.opts);
        let span = self
            .sink
            .get_span(lead + payload.len())
            .map_err(|k| WriteError::new(k, off))?;
        let mut w = write_lead(span, &self.state, &self.opts);
        span[w..w + payload.len()].copy_from_slice(payload);
        w += payload.len();
        self.sink.advance(w).map_err(|k| WriteError::new(k, off))?;
        self.pending += w;
        self.state.on_value(token);
        Ok(())
    }
}

/// Bytes the separator/indent lead of a non-closing token needs.
pub(super) fn lead_len(state: &StructState, opts: &Options) -> usize {
    let mut n = 0;
    if state.needs_separator() {
        n += 1;
    }
    if opts.indented && state.depth() > 0 && state.prev() != Token::PropertyName {
        n += 1 + state.depth() as usize * opts.indent_width as usize;
    }
    n
}

/// Writes the separator/indent lead and returns its length. At the top level
/// the peer separator is a newline (multi-value framing); inside containers
/// it is a comma. Values directly after a property name stay on its line.
pub(super) fn write_lead(dst: &mut [u8], state: &StructState, opts: &Options) -> usize {
    let mut w = 0;
    if state.needs_separator() {
        dst[w] = if state.depth() == 0 { b'\n' } else { b',' };
        w += 1;
    }
    if opts.indented && state.depth() > 0 && state.prev() != Token::PropertyName {
        dst[w] = b'\n';
        w += 1;
        let indent = state.depth() as usize * opts.indent_width as usize;
        dst[w..w + indent].fill(b' ');
        w += indent;
    }
    w
}

/// Lead of a closing bracket: newline plus parent-level indentation, unless
/// the container is empty.
fn close_lead_len(state: &StructState, opts: &Options) -> usize {
    if opts.indented
        && state.depth() > 0
        && !matches!(state.prev(), Token::StartObject | Token::StartArray)
    {
        1 + (state.depth() as usize - 1) * opts.indent_width as usize
    } else {
        0
    }
}
