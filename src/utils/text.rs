use std::io;

use crate::error::{Error, Result};

/// Append-only text output. Routines never seek or read back.
pub trait TextSink {
    fn push_str(&mut self, s: &str) -> Result<()>;
    fn push_char(&mut self, ch: char) -> Result<()>;
}

impl TextSink for String {
    fn push_str(&mut self, s: &str) -> Result<()> {
        self.push_str(s);
        Ok(())
    }

    fn push_char(&mut self, ch: char) -> Result<()> {
        self.push(ch);
        Ok(())
    }
}

/// Adapter that streams text into any [`io::Write`].
pub(crate) struct IoSink<W: io::Write> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        IoSink { inner }
    }
}

impl<W: io::Write> TextSink for IoSink<W> {
    fn push_str(&mut self, s: &str) -> Result<()> {
        self.inner
            .write_all(s.as_bytes())
            .map_err(|err| Error::Io(err.to_string()))
    }

    fn push_char(&mut self, ch: char) -> Result<()> {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        self.inner
            .write_all(encoded.as_bytes())
            .map_err(|err| Error::Io(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_string_sink() {
        let mut out = String::new();
        TextSink::push_str(&mut out, "a").unwrap();
        TextSink::push_char(&mut out, 'é').unwrap();
        assert_eq!(out, "aé");
    }

    #[rstest::rstest]
    fn test_io_sink() {
        let mut sink = IoSink::new(Vec::new());
        sink.push_str("hello").unwrap();
        sink.push_char('!').unwrap();
        assert_eq!(sink.inner, b"hello!");
    }
}
