use super::{lead_len, write_lead, Writer};
use crate::classify::{first_escape_index, first_escape_index_utf16};
use crate::error::{WriteError, WriteErrorKind};
use crate::escape::{escape_utf16, escape_utf8, MAX_ESCAPE_EXPANSION, MAX_TRANSCODE_EXPANSION};
use crate::pool::STACK_SCRATCH_SIZE;
use crate::sink::BufferSink;
use crate::state::Token;

impl<S: BufferSink> Writer<S> {
    /// Writes a property name. The name is escaped per the writer's policy;
    /// when nothing needs escaping the bytes go into the sink verbatim.
    pub fn property_name(&mut self, name: &str) -> Result<(), WriteError> {
        self.string_token_utf8(name.as_bytes(), true, true)
    }

    /// Byte-sequence arity of [`property_name`](Self::property_name). The
    /// input is validated as UTF-8 while escaping; ill-formed input fails
    /// with `InvalidUtf8`.
    pub fn property_name_bytes(&mut self, name: &[u8]) -> Result<(), WriteError> {
        self.string_token_utf8(name, true, true)
    }

    /// UTF-16 code-unit arity of [`property_name`](Self::property_name).
    /// Lone or misordered surrogates fail with `InvalidUtf16`.
    pub fn property_name_utf16(&mut self, name: &[u16]) -> Result<(), WriteError> {
        self.string_token_utf16(name, true)
    }

    /// Writes a property name without classification or escaping. The caller
    /// guarantees the content needs none; output validity is otherwise the
    /// caller's problem, as with `skip_validation`.
    pub fn property_name_raw(&mut self, name: &str) -> Result<(), WriteError> {
        self.string_token_utf8(name.as_bytes(), true, false)
    }

    /// Writes a string value, escaped per the writer's policy.
    pub fn string_value(&mut self, value: &str) -> Result<(), WriteError> {
        self.string_token_utf8(value.as_bytes(), false, true)
    }

    /// Byte-sequence arity of [`string_value`](Self::string_value).
    pub fn string_value_bytes(&mut self, value: &[u8]) -> Result<(), WriteError> {
        self.string_token_utf8(value, false, true)
    }

    /// UTF-16 code-unit arity of [`string_value`](Self::string_value).
    pub fn string_value_utf16(&mut self, value: &[u16]) -> Result<(), WriteError> {
        self.string_token_utf16(value, false)
    }

    /// Writes a string value without classification or escaping.
    pub fn string_value_raw(&mut self, value: &str) -> Result<(), WriteError> {
        self.string_token_utf8(value.as_bytes(), false, false)
    }

    fn check_string_token(&self, as_name: bool) -> Result<(), WriteError> {
        if self.opts.skip_validation {
            return Ok(());
        }
        let check = if as_name {
            self.state.check_property_name()
        } else {
            self.state.check_value(self.opts.multiple_values)
        };
        check.map_err(|k| self.fail(k))
    }

    /// Quote/colon overhead around the payload of a name or string token.
    fn string_extra(&self, as_name: bool) -> usize {
        2 + if as_name {
            1 + self.opts.indented as usize
        } else {
            0
        }
    }

    fn string_token_utf8(
        &mut self,
        input: &[u8],
        as_name: bool,
        escape: bool,
    ) -> Result<(), WriteError> {
        self.check_string_token(as_name)?;
        let first = if escape {
            first_escape_index(input)
        } else {
            None
        };
        match first {
            None => self.quoted_verbatim(input, as_name),
            Some(first) => self.quoted_escaped_utf8(input, first, as_name),
        }
    }

    /// Fast path: nothing to escape, one memcpy between quotes. No scratch
    /// buffer is touched.
    fn quoted_verbatim(&mut self, input: &[u8], as_name: bool) -> Result<(), WriteError> {
        let off = self.offset();
        let indented = self.opts.indented;
        let lead = lead_len(&self.state, &self.opts);
        let total = input
            .len()
            .checked_add(lead + self.string_extra(as_name))
            .ok_or_else(|| self.fail(WriteErrorKind::ArgumentTooLarge))?;
        let span = self
            .sink
            .get_span(total)
            .map_err(|k| WriteError::new(k, off))?;
        let mut w = write_lead(span, &self.state, &self.opts);
        span[w] = b'"';
        w += 1;
        span[w..w + input.len()].copy_from_slice(input);
        w += input.len();
        let w = finish_quoted(span, w, as_name, indented);
        self.sink.advance(w).map_err(|k| WriteError::new(k, off))?;
        self.pending += w;
        self.note_string_token(as_name);
        Ok(())
    }

    fn quoted_escaped_utf8(
        &mut self,
        input: &[u8],
        first: usize,
        as_name: bool,
    ) -> Result<(), WriteError> {
        let off = self.offset();
        let worst = input
            .len()
            .checked_mul(MAX_ESCAPE_EXPANSION)
            .ok_or_else(|| self.fail(WriteErrorKind::ArgumentTooLarge))?;
        let extra = self.string_extra(as_name);
        let indented = self.opts.indented;
        let Writer {
            sink,
            pool,
            state,
            opts,
            pending,
            ..
        } = self;
        let mut stack_buf = [0u8; STACK_SCRATCH_SIZE];
        let mut rented = None;
        let scratch: &mut [u8] = if worst <= STACK_SCRATCH_SIZE {
            &mut stack_buf
        } else {
            rented.insert(pool.rent(worst)).buf()
        };
        let escaped_len = escape_utf8(input, scratch, first).map_err(|k| WriteError::new(k, off))?;
        let escaped = &scratch[..escaped_len];
        let lead = lead_len(state, opts);
        let span = sink
            .get_span(lead + escaped_len + extra)
            .map_err(|k| WriteError::new(k, off))?;
        let mut w = write_lead(span, state, opts);
        span[w] = b'"';
        w += 1;
        span[w..w + escaped_len].copy_from_slice(escaped);
        w += escaped_len;
        let w = finish_quoted(span, w, as_name, indented);
        sink.advance(w).map_err(|k| WriteError::new(k, off))?;
        *pending += w;
        drop(rented);
        self.note_string_token(as_name);
        Ok(())
    }

    fn string_token_utf16(&mut self, input: &[u16], as_name: bool) -> Result<(), WriteError> {
        self.check_string_token(as_name)?;
        let off = self.offset();
        match first_escape_index_utf16(input) {
            None => {
                // Escape-free UTF-16 is plain ASCII; narrow each unit.
                let indented = self.opts.indented;
                let lead = lead_len(&self.state, &self.opts);
                let total = input
                    .len()
                    .checked_add(lead + self.string_extra(as_name))
                    .ok_or_else(|| self.fail(WriteErrorKind::ArgumentTooLarge))?;
                let span = self
                    .sink
                    .get_span(total)
                    .map_err(|k| WriteError::new(k, off))?;
                let mut w = write_lead(span, &self.state, &self.opts);
                span[w] = b'"';
                w += 1;
                for &u in input {
                    span[w] = u as u8;
                    w += 1;
                }
                let w = finish_quoted(span, w, as_name, indented);
                self.sink.advance(w).map_err(|k| WriteError::new(k, off))?;
                self.pending += w;
                self.note_string_token(as_name);
                Ok(())
            }
            Some(first) => self.quoted_escaped_utf16(input, first, as_name),
        }
    }

    fn quoted_escaped_utf16(
        &mut self,
        input: &[u16],
        first: usize,
        as_name: bool,
    ) -> Result<(), WriteError> {
        let off = self.offset();
        let worst = input
            .len()
            .checked_mul(MAX_ESCAPE_EXPANSION * MAX_TRANSCODE_EXPANSION)
            .ok_or_else(|| self.fail(WriteErrorKind::ArgumentTooLarge))?;
        let extra = self.string_extra(as_name);
        let indented = self.opts.indented;
        let Writer {
            sink,
            pool,
            state,
            opts,
            pending,
            ..
        } = self;
        let mut stack_buf = [0u8; STACK_SCRATCH_SIZE];
        let mut rented = None;
        let scratch: &mut [u8] = if worst <= STACK_SCRATCH_SIZE {
            &mut stack_buf
        } else {
            rented.insert(pool.rent(worst)).buf()
        };
        let escaped_len =
            escape_utf16(input, scratch, first).map_err(|k| WriteError::new(k, off))?;
        let escaped = &scratch[..escaped_len];
        let lead = lead_len(state, opts);
        let span = sink
            .get_span(lead + escaped_len + extra)
            .map_err(|k| WriteError::new(k, off))?;
        let mut w = write_lead(span, state, opts);
        span[w] = b'"';
        w += 1;
        span[w..w + escaped_len].copy_from_slice(escaped);
        w += escaped_len;
        let w = finish_quoted(span, w, as_name, indented);
        sink.advance(w).map_err(|k| WriteError::new(k, off))?;
        *pending += w;
        drop(rented);
        self.note_string_token(as_name);
        Ok(())
    }

    #[inline]
    fn note_string_token(&mut self, as_name: bool) {
        if as_name {
            self.state.on_property_name();
        } else {
            self.state.on_value(Token::String);
        }
    }
}

#[inline]
fn finish_quoted(span: &mut [u8], mut w: usize, as_name: bool, indented: bool) -> usize {
    span[w] = b'"';
    w += 1;
    if as_name {
        span[w] = b':';
        w += 1;
        if indented {
            span[w] = b' ';
            w += 1;
        }
    }
    w
}
