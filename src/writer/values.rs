use super::{lead_len, write_lead, Writer};
use crate::error::{WriteError, WriteErrorKind};
use crate::fmt::{write_date_time, write_guid, DateTime, GUID_LEN, MAX_DATE_TIME_LEN};
use crate::sink::BufferSink;
use crate::state::Token;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Base64 input is encoded in slices of this many bytes inside the reserved
/// window. The size is a multiple of 3 so no chunk but the last produces
/// padding, which keeps chunked output bytewise-identical to a single-shot
/// encode.
const BASE64_CHUNK: usize = 3 * 1024;

impl<S: BufferSink> Writer<S> {
    /// Writes an integer value. All signed and unsigned widths format
    /// natively; unsigned values above `i64::MAX` are emitted exactly.
    pub fn number_value<N: itoa::Integer>(&mut self, value: N) -> Result<(), WriteError> {
        self.check_value_token()?;
        let mut buf = itoa::Buffer::new();
        self.commit_ascii_token(Token::Number, buf.format(value).as_bytes())
    }

    /// Writes an `f64` in shortest round-trip form. NaN and the infinities
    /// have no JSON representation and fail with `InvalidFloatValue`.
    pub fn f64_value(&mut self, value: f64) -> Result<(), WriteError> {
        self.check_value_token()?;
        if !value.is_finite() {
            return Err(self.fail(WriteErrorKind::InvalidFloatValue));
        }
        let mut buf = ryu::Buffer::new();
        self.commit_ascii_token(Token::Number, buf.format_finite(value).as_bytes())
    }

    /// `f32` counterpart of [`f64_value`](Self::f64_value).
    pub fn f32_value(&mut self, value: f32) -> Result<(), WriteError> {
        self.check_value_token()?;
        if !value.is_finite() {
            return Err(self.fail(WriteErrorKind::InvalidFloatValue));
        }
        let mut buf = ryu::Buffer::new();
        self.commit_ascii_token(Token::Number, buf.format_finite(value).as_bytes())
    }

    pub fn bool_value(&mut self, value: bool) -> Result<(), WriteError> {
        self.check_value_token()?;
        if value {
            self.commit_ascii_token(Token::True, b"true")
        } else {
            self.commit_ascii_token(Token::False, b"false")
        }
    }

    pub fn null_value(&mut self) -> Result<(), WriteError> {
        self.check_value_token()?;
        self.commit_ascii_token(Token::Null, b"null")
    }

    /// Writes a timestamp as a quoted ISO 8601 string.
    pub fn date_time_value(&mut self, value: &DateTime) -> Result<(), WriteError> {
        self.check_value_token()?;
        let mut buf = [0u8; MAX_DATE_TIME_LEN + 2];
        buf[0] = b'"';
        let n = write_date_time(&mut buf[1..], value);
        buf[n + 1] = b'"';
        self.commit_ascii_token(Token::String, &buf[..n + 2])
    }

    /// Writes a GUID as a quoted lowercase `8-4-4-4-12` string. Bytes are
    /// taken in RFC 4122 order.
    pub fn guid_value(&mut self, value: [u8; 16]) -> Result<(), WriteError> {
        self.check_value_token()?;
        let mut buf = [0u8; GUID_LEN + 2];
        buf[0] = b'"';
        let n = write_guid(&mut buf[1..], &value);
        buf[n + 1] = b'"';
        self.commit_ascii_token(Token::String, &buf[..n + 2])
    }

    /// Writes raw bytes as a quoted standard-alphabet base64 string.
    pub fn base64_value(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.check_value_token()?;
        let off = self.offset();
        let encoded = base64::encoded_len(bytes.len(), true)
            .ok_or_else(|| self.fail(WriteErrorKind::ArgumentTooLarge))?;
        let lead = lead_len(&self.state, &self.opts);
        let total = encoded
            .checked_add(lead + 2)
            .ok_or_else(|| self.fail(WriteErrorKind::ArgumentTooLarge))?;
        let span = self
            .sink
            .get_span(total)
            .map_err(|k| WriteError::new(k, off))?;
        let mut w = write_lead(span, &self.state, &self.opts);
        span[w] = b'"';
        w += 1;
        for chunk in bytes.chunks(BASE64_CHUNK) {
            // Cannot fail: the window was sized from `encoded_len`.
            w += STANDARD.encode_slice(chunk, &mut span[w..]).unwrap();
        }
        span[w] = b'"';
        w += 1;
        self.sink.advance(w).map_err(|k| WriteError::new(k, off))?;
        self.pending += w;
        self.state.on_value(Token::String);
        Ok(())
    }

    // ---- fused name + value calls ----
    //
    // Each produces output identical to the two-call sequence. Atomicity is
    // per token: a value-side failure after the name committed leaves the
    // writer expecting a value, exactly as in the two-call form. Value checks
    // that need no sink interaction (float finiteness, base64 sizing) run
    // before the name so those rejections commit nothing.

    pub fn property_and_string(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        self.property_name(name)?;
        self.string_value(value)
    }

    pub fn property_and_number<N: itoa::Integer>(
        &mut self,
        name: &str,
        value: N,
    ) -> Result<(), WriteError> {
        self.property_name(name)?;
        self.number_value(value)
    }

    pub fn property_and_f64(&mut self, name: &str, value: f64) -> Result<(), WriteError> {
        if !self.opts.skip_validation {
            self.state
                .check_property_name()
                .map_err(|k| self.fail(k))?;
        }
        if !value.is_finite() {
            return Err(self.fail(WriteErrorKind::InvalidFloatValue));
        }
        self.property_name(name)?;
        self.f64_value(value)
    }

    pub fn property_and_bool(&mut self, name: &str, value: bool) -> Result<(), WriteError> {
        self.property_name(name)?;
        self.bool_value(value)
    }

    pub fn property_and_null(&mut self, name: &str) -> Result<(), WriteError> {
        self.property_name(name)?;
        self.null_value()
    }

    pub fn property_and_date_time(
        &mut self,
        name: &str,
        value: &DateTime,
    ) -> Result<(), WriteError> {
        self.property_name(name)?;
        self.date_time_value(value)
    }

    pub fn property_and_guid(&mut self, name: &str, value: [u8; 16]) -> Result<(), WriteError> {
        self.property_name(name)?;
        self.guid_value(value)
    }

    pub fn property_and_base64(&mut self, name: &str, bytes: &[u8]) -> Result<(), WriteError> {
        if !self.opts.skip_validation {
            self.state
                .check_property_name()
                .map_err(|k| self.fail(k))?;
        }
        if base64::encoded_len(bytes.len(), true).is_none() {
            return Err(self.fail(WriteErrorKind::ArgumentTooLarge));
        }
        self.property_name(name)?;
        self.base64_value(bytes)
    }
}
