use crate::constants::INDENT_WIDTH;
use crate::date::{self, JsonDateTime};
use crate::error::Result;
use crate::options::{DateTimeFormat, UnspecifiedDateTimeKindBehavior};
use crate::utils::number;
use crate::utils::string::{escape_str_into, EscapeMode};
use crate::utils::text::TextSink;

/// Streaming JSON output over an arbitrary sink.
///
/// Indentation strings are cached per depth and grown on demand, so
/// pretty-printing deep structures does not re-allocate per line.
pub(crate) struct JsonWriter<'a> {
    out: &'a mut dyn TextSink,
    indent_cache: Vec<String>,
}

impl<'a> JsonWriter<'a> {
    pub fn new(out: &'a mut dyn TextSink) -> Self {
        JsonWriter {
            out,
            indent_cache: vec![String::new()],
        }
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.out.push_str(s)
    }

    pub fn write_char(&mut self, ch: char) -> Result<()> {
        self.out.push_char(ch)
    }

    pub fn newline_indent(&mut self, depth: usize) -> Result<()> {
        self.out.push_char('\n')?;
        if depth == 0 {
            return Ok(());
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.out.push_str(&self.indent_cache[depth])
    }

    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        number::write_i64_into(&mut *self.out, value)
    }

    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        number::write_u64_into(&mut *self.out, value)
    }

    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        number::write_f64_into(&mut *self.out, value)
    }

    pub fn write_quoted(&mut self, s: &str, mode: EscapeMode) -> Result<()> {
        self.out.push_char('"')?;
        escape_str_into(&mut *self.out, s, mode)?;
        self.out.push_char('"')
    }

    pub fn write_quoted_char(&mut self, ch: char, mode: EscapeMode) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_quoted(ch.encode_utf8(&mut buf), mode)
    }

    pub fn write_date(
        &mut self,
        value: JsonDateTime,
        format: DateTimeFormat,
        behavior: UnspecifiedDateTimeKindBehavior,
    ) -> Result<()> {
        date::write_date_into(&mut *self.out, value, format, behavior)
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let mut next = String::with_capacity(self.indent_cache.len() * INDENT_WIDTH);
            if let Some(prev) = self.indent_cache.last() {
                next.push_str(prev);
            }
            for _ in 0..INDENT_WIDTH {
                next.push(' ');
            }
            self.indent_cache.push(next);
        }
    }
}
