use crate::error::Result;
use crate::utils::text::TextSink;

/// Which escape table a routine was compiled against.
///
/// `JavaScriptSafe` additionally escapes U+2028 and U+2029, which are valid
/// inside JSON strings but terminate lines in raw JavaScript source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeMode {
    Json,
    JavaScriptSafe,
}

impl EscapeMode {
    pub fn for_jsonp(jsonp: bool) -> Self {
        if jsonp {
            EscapeMode::JavaScriptSafe
        } else {
            EscapeMode::Json
        }
    }
}

/// Escape `s` per the JSON string grammar, without the surrounding quotes.
pub(crate) fn escape_str_into<S: TextSink + ?Sized>(
    out: &mut S,
    s: &str,
    mode: EscapeMode,
) -> Result<()> {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\"")?,
            '\\' => out.push_str("\\\\")?,
            '\u{0008}' => out.push_str("\\b")?,
            '\t' => out.push_str("\\t")?,
            '\n' => out.push_str("\\n")?,
            '\u{000C}' => out.push_str("\\f")?,
            '\r' => out.push_str("\\r")?,
            ch if (ch as u32) < 0x20 => write_unicode_escape(&mut *out, ch as u32)?,
            '/' if mode == EscapeMode::JavaScriptSafe => out.push_str("\\/")?,
            '\u{2028}' if mode == EscapeMode::JavaScriptSafe => out.push_str("\\u2028")?,
            '\u{2029}' if mode == EscapeMode::JavaScriptSafe => out.push_str("\\u2029")?,
            ch => out.push_char(ch)?,
        }
    }
    Ok(())
}

fn write_unicode_escape<S: TextSink + ?Sized>(out: &mut S, code: u32) -> Result<()> {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut buf = *b"\\u0000";
    buf[4] = HEX[((code >> 4) & 0xF) as usize];
    buf[5] = HEX[(code & 0xF) as usize];
    out.push_str(std::str::from_utf8(&buf).unwrap_or("\\u0000"))
}
